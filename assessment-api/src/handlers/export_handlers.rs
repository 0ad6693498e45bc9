use super::AppState;
use crate::error::AppError;
use crate::export;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};

pub(crate) fn attachment(filename: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename.to_string())],
    }
}

pub async fn download_csv(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let body = export::assessments_report(&data.database)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(attachment(&data.config.export.filename))
        .body(body))
}
