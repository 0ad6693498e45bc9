use super::{html, AppState, NoticeQuery};
use crate::error::AppError;
use crate::reporting;
use crate::templates::script_json;
use actix_web::{web, HttpResponse};
use serde_json::json;
use shared_types::AssessmentListResponse;

pub async fn results(
    data: web::Data<AppState>,
    query: web::Query<NoticeQuery>,
) -> Result<HttpResponse, AppError> {
    let assessments = data.database.list_assessments()?;
    let context = json!({
        "notice": query.notice,
        "level": query.level(),
        "assessments": assessments,
    });
    Ok(html(data.templates.render("results", &context)?))
}

pub async fn dashboard(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dashboard = reporting::dashboard(&data.database)?;

    let provinces: Vec<_> = dashboard
        .province_breakdown
        .labels
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "link": format!("/dashboard/province/{}", urlencoding::encode(name)),
            })
        })
        .collect();

    let context = json!({
        "provinces": provinces,
        "dashboard_json": script_json(&dashboard)?,
    });
    Ok(html(data.templates.render("dashboard", &context)?))
}

pub async fn province_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let province = path.into_inner();
    let breakdown = reporting::province_dashboard(&data.database, &province)?;

    let context = json!({
        "province": breakdown.province,
        "has_data": !breakdown.municipality_breakdown.labels.is_empty(),
        "breakdown_json": script_json(&breakdown)?,
    });
    Ok(html(data.templates.render("province_dashboard", &context)?))
}

pub async fn api_dashboard(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(reporting::dashboard(&data.database)?))
}

pub async fn api_province_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let province = path.into_inner();
    Ok(HttpResponse::Ok().json(reporting::province_dashboard(&data.database, &province)?))
}

pub async fn api_assessments(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = AssessmentListResponse {
        assessments: data.database.list_assessments()?,
    };
    Ok(HttpResponse::Ok().json(response))
}
