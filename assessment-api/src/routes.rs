//! Route table shared by the server binary and the integration tests.

use crate::handlers::{export_handlers, form_handlers, main_handlers, report_handlers};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(form_handlers::index))
        .route("/submit", web::post().to(form_handlers::submit))
        .route("/success", web::get().to(form_handlers::success))
        .route("/results", web::get().to(report_handlers::results))
        .route("/dashboard", web::get().to(report_handlers::dashboard))
        .route(
            "/dashboard/province/{province}",
            web::get().to(report_handlers::province_dashboard),
        )
        .route("/download_csv", web::get().to(export_handlers::download_csv))
        .route("/health", web::get().to(main_handlers::health_check))
        .service(
            web::scope("/api")
                .route("/assessments", web::get().to(report_handlers::api_assessments))
                .route("/dashboard", web::get().to(report_handlers::api_dashboard))
                .route(
                    "/dashboard/province/{province}",
                    web::get().to(report_handlers::api_province_dashboard),
                ),
        );
}
