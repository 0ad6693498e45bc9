use super::{form_with_notice, html, see_other, AppState, NoticeQuery};
use crate::error::AppError;
use crate::reference::AddressHierarchy;
use crate::submission::Submission;
use crate::templates::script_json;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use shared_types::QuestionSection;
use tracing::{error, info, warn};

pub const SUBMITTED_MESSAGE: &str = "Assessment submitted successfully!";

#[derive(Serialize)]
struct FormSection {
    #[serde(flatten)]
    section: QuestionSection,
    has_ratings: bool,
}

/// Renders the questionnaire with the address listing read fresh from disk
pub async fn index(
    data: web::Data<AppState>,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse, AppError> {
    let questions = data.database.list_questions()?;
    let addresses = AddressHierarchy::load_or_empty(&data.config.reference.address_file);

    let sections: Vec<FormSection> = QuestionSection::group(questions)
        .into_iter()
        .map(|section| FormSection {
            has_ratings: section.has_ratings(),
            section,
        })
        .collect();

    let context = json!({
        "notice": query.notice,
        "level": query.level(),
        "provinces": addresses.provinces(),
        "sections": sections,
        "address_json": script_json(&addresses)?,
    });

    Ok(html(data.templates.render("index", &context)?))
}

pub async fn submit(
    data: web::Data<AppState>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let submission = match Submission::from_fields(form.into_inner()) {
        Ok(submission) => submission,
        Err(AppError::InvalidRequest(message)) => {
            warn!(%message, "Rejected submission");
            return Ok(form_with_notice(&message, "danger"));
        }
        Err(e) => return Err(e),
    };

    match data
        .database
        .record_submission(&submission, Utc::now().naive_utc())
    {
        Ok(receipt) => {
            info!(
                household_id = %submission.household_id,
                assessment_id = receipt.assessment_id,
                household_created = receipt.household_created,
                answers = receipt.answers_recorded,
                "Assessment recorded"
            );
            Ok(see_other("/success"))
        }
        Err(e) => {
            error!(household_id = %submission.household_id, error = %e, "Failed to record assessment");
            Ok(form_with_notice(&format!("An error occurred: {e}"), "danger"))
        }
    }
}

pub async fn success(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let context = json!({ "message": SUBMITTED_MESSAGE });
    Ok(html(data.templates.render("success", &context)?))
}
