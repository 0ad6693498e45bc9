#![allow(dead_code)]

use actix_web::{test, web, App};
use assessment_api::config::ApiConfig;
use assessment_api::handlers::AppState;
use assessment_api::routes::configure_routes;
use assessment_api::seed::reset_and_seed;
use assessment_api::storage::Database;
use assessment_api::templates::Templates;
use shared_types::Question;
use std::io::Write;
use std::sync::Arc;
use std::time::SystemTime;
use tempfile::NamedTempFile;

pub const ADDRESS_CSV: &str = "\
Region Name,Province Name,City/Municipality Name,Barangay Name
Region VI,Iloilo,Pototan,Amamaros
Region VI,Iloilo,Pototan,Abangay
Region VI,Iloilo,Janiuay,Aquino
Region VI,Capiz,Roxas City,Bago
";

pub struct TestApp<S> {
    pub db: Arc<Database>,
    pub config: Arc<ApiConfig>,
    pub address_file: NamedTempFile,
    pub app: S,
}

pub fn setup_test_db() -> anyhow::Result<Database> {
    let db = Database::open_in_memory()?;
    reset_and_seed(&db)?;
    Ok(db)
}

pub fn write_address_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub async fn setup_test_app() -> anyhow::Result<TestApp<impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
>>> {
    let db = Arc::new(setup_test_db()?);
    let address_file = write_address_file(ADDRESS_CSV)?;

    let mut config = ApiConfig::default();
    config.reference.address_file = address_file.path().to_path_buf();
    let config = Arc::new(config);

    let state = web::Data::new(AppState {
        database: db.clone(),
        templates: Arc::new(Templates::new()?),
        config: config.clone(),
        start_time: SystemTime::now(),
    });

    let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

    Ok(TestApp {
        db,
        config,
        address_file,
        app,
    })
}

/// Questions of the given section in display order
pub fn questions_in(db: &Database, section: &str) -> anyhow::Result<Vec<Question>> {
    Ok(db
        .list_questions()?
        .into_iter()
        .filter(|q| q.section == section)
        .collect())
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn submit_request(fields: &[(&str, &str)]) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/submit")
        .insert_header((
            actix_web::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        ))
        .set_payload(form_body(fields))
        .to_request()
}

pub fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
