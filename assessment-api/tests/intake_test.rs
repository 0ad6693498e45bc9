mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use assessment_api::seed::{sections, QUESTION_CATALOG};
use common::{location, questions_in, setup_test_app, submit_request};

#[actix_rt::test]
async fn test_missing_household_id_persists_nothing() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let questions_before = test_app.db.count_questions()?;

    let resp = test::call_service(
        &test_app.app,
        submit_request(&[("household_id", "   "), ("name", "No ID"), ("q-1", "5")]),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&resp),
        "/?notice=Household%20ID%20is%20required.&level=danger"
    );
    assert_eq!(test_app.db.count_questions()?, questions_before);
    assert_eq!(test_app.db.count_assessments()?, 0);
    assert_eq!(test_app.db.count_households()?, 0);
    assert_eq!(test_app.db.count_answers()?, 0);

    Ok(())
}

#[actix_rt::test]
async fn test_notice_is_shown_on_form() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = test::TestRequest::get()
        .uri("/?notice=Household%20ID%20is%20required.&level=danger")
        .to_request();
    let body = test::call_and_read_body(&test_app.app, req).await;
    let html = String::from_utf8(body.to_vec())?;

    assert!(html.contains("notice-danger"));
    assert!(html.contains("Household ID is required."));

    Ok(())
}

#[actix_rt::test]
async fn test_successful_submission_redirects_to_success() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let rating = &questions_in(&test_app.db, sections::EDUCATION)?[0];
    let key = format!("q-{}", rating.id);

    let resp = test::call_service(
        &test_app.app,
        submit_request(&[
            ("household_id", "HH-2024-001"),
            ("name", "Maria Santos"),
            ("province", "Iloilo"),
            ("municipality", "Pototan"),
            ("barangay", "Abangay"),
            (key.as_str(), "4"),
        ]),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/success");
    assert_eq!(test_app.db.count_assessments()?, 1);
    assert_eq!(test_app.db.count_answers()?, 1);

    let household = test_app
        .db
        .find_household("HH-2024-001")?
        .ok_or_else(|| anyhow::anyhow!("household not stored"))?;
    assert_eq!(household.profile.barangay.as_deref(), Some("Abangay"));

    let req = test::TestRequest::get().uri("/success").to_request();
    let body = test::call_and_read_body(&test_app.app, req).await;
    assert!(String::from_utf8(body.to_vec())?.contains("Assessment submitted successfully!"));

    Ok(())
}

#[actix_rt::test]
async fn test_same_household_twice_creates_two_assessments() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    for name in ["First Name", "Second Name"] {
        let resp = test::call_service(
            &test_app.app,
            submit_request(&[("household_id", "HH-55"), ("name", name), ("q-1", "3")]),
        )
        .await;
        assert_eq!(location(&resp), "/success");
    }

    assert_eq!(test_app.db.count_households()?, 1);
    assert_eq!(test_app.db.count_assessments()?, 2);

    let listed = test_app.db.list_assessments()?;
    assert_ne!(listed[0].id, listed[1].id);
    assert!(listed
        .iter()
        .all(|a| a.household_name.as_deref() == Some("First Name")));

    Ok(())
}

#[actix_rt::test]
async fn test_blank_answers_are_not_persisted() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let narrative = &questions_in(&test_app.db, sections::PROBE_EDUCATION)?[0];
    let narrative_key = format!("q-{}", narrative.id);

    test::call_service(
        &test_app.app,
        submit_request(&[
            ("household_id", "HH-3"),
            ("q-1", "2"),
            ("q-2", ""),
            (narrative_key.as_str(), "   "),
        ]),
    )
    .await;

    assert_eq!(test_app.db.count_assessments()?, 1);
    assert_eq!(test_app.db.count_answers()?, 1);

    Ok(())
}

#[actix_rt::test]
async fn test_unknown_question_rolls_back_submission() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let unknown = format!("q-{}", QUESTION_CATALOG.len() + 1000);

    let resp = test::call_service(
        &test_app.app,
        submit_request(&[("household_id", "HH-4"), ("q-1", "5"), (unknown.as_str(), "5")]),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let target = location(&resp);
    assert!(target.starts_with("/?notice=An%20error%20occurred%3A%20"));
    assert!(target.ends_with("&level=danger"));

    assert_eq!(test_app.db.count_households()?, 0);
    assert_eq!(test_app.db.count_assessments()?, 0);
    assert_eq!(test_app.db.count_answers()?, 0);

    Ok(())
}

#[actix_rt::test]
async fn test_repeated_question_field_stores_one_answer() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let resp = test::call_service(
        &test_app.app,
        submit_request(&[("household_id", "HH-1"), ("q-1", "5"), ("q-1", "1")]),
    )
    .await;

    assert_eq!(location(&resp), "/success");
    assert_eq!(test_app.db.count_answers()?, 1);

    let rows = test_app.db.export_rows()?;
    assert_eq!(rows[0].answers.get(&1).map(String::as_str), Some("5"));

    Ok(())
}
