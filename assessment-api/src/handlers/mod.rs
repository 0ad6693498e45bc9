pub mod export_handlers;
pub mod form_handlers;
pub mod main_handlers;
pub mod report_handlers;

use crate::config::ApiConfig;
use crate::storage::Database;
use crate::templates::Templates;
use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;
use serde::Deserialize;
use std::sync::Arc;
use std::time::SystemTime;

pub struct AppState {
    pub database: Arc<Database>,
    pub templates: Arc<Templates>,
    pub config: Arc<ApiConfig>,
    pub start_time: SystemTime,
}

/// One-shot banner carried on a redirect as `?notice=...&level=...`
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    pub level: Option<String>,
}

impl NoticeQuery {
    pub fn level(&self) -> &'static str {
        match self.level.as_deref() {
            Some("success") => "success",
            Some("danger") => "danger",
            Some("warning") => "warning",
            _ => "info",
        }
    }
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn form_with_notice(message: &str, level: &str) -> HttpResponse {
    see_other(&format!(
        "/?notice={}&level={}",
        urlencoding::encode(message),
        level
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_levels_fall_back_to_info() {
        let query = NoticeQuery {
            notice: Some("x".to_string()),
            level: Some("\" onmouseover=\"alert(1)".to_string()),
        };
        assert_eq!(query.level(), "info");
        assert_eq!(NoticeQuery::default().level(), "info");
    }

    #[test]
    fn test_form_with_notice_encodes_message() {
        let response = form_with_notice("Household ID is required.", "danger");
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?notice=Household%20ID%20is%20required.&level=danger"
        );
    }
}
