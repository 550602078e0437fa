mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_profile_upsert_flow() {
    let app = TestApp::new().await;
    let tutor = app.register("tutor@example.com", "tutor").await;
    let tutor_id = app.user_id(&tutor).await;

    // first fetch lazily creates an empty profile
    let res = app.request("GET", "/tutors/me/profile", Some(&tutor), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let profile = parse_body(res).await;
    assert_eq!(profile["user_id"], tutor_id.as_str());
    assert!(profile["bio"].is_null());

    let res = app.request("PUT", "/tutors/me/profile", Some(&tutor), Some(json!({
        "bio": "Ten years of piano teaching",
        "city": "Lyon",
        "postal_code": "69002",
        "years_experience": 10
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["bio"], "Ten years of piano teaching");
    assert_eq!(updated["years_experience"], 10);

    // partial update leaves other fields alone
    let res = app.request("PUT", "/tutors/me/profile", Some(&tutor), Some(json!({
        "city": "Villeurbanne"
    }))).await;
    let updated = parse_body(res).await;
    assert_eq!(updated["city"], "Villeurbanne");
    assert_eq!(updated["bio"], "Ten years of piano teaching");

    let res = app.request("GET", &format!("/tutors/{}/profile", tutor_id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["city"], "Villeurbanne");
}

#[tokio::test]
async fn test_students_have_no_tutor_profile() {
    let app = TestApp::new().await;
    let student = app.register("student@example.com", "student").await;

    let res = app.request("GET", "/tutors/me/profile", Some(&student), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.request("PUT", "/tutors/me/profile", Some(&student), Some(json!({
        "bio": "hello"
    }))).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_public_profile_not_found() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/tutors/no-such-tutor/profile", None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_department_search() {
    let app = TestApp::new().await;

    let paris = app.register("paris@example.com", "tutor").await;
    let lyon = app.register("lyon@example.com", "tutor").await;
    let paris_id = app.user_id(&paris).await;

    app.request("PUT", "/tutors/me/profile", Some(&paris), Some(json!({
        "postal_code": "75001", "city": "Paris"
    }))).await;
    app.request("PUT", "/tutors/me/profile", Some(&lyon), Some(json!({
        "postal_code": "69002", "city": "Lyon"
    }))).await;

    // 75011 is in the same department as 75001
    let res = app.request("GET", "/search/tutors?zip_code=75011", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["search_zip"], "75011");
    assert_eq!(body["data"][0]["user_id"], paris_id.as_str());
    assert_eq!(body["data"][0]["first_name"], "Test");

    // a zip that maps to no department matches nothing
    let res = app.request("GET", "/search/tutors?zip_code=abc", None, None).await;
    let body = parse_body(res).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_corsican_departments_stay_apart() {
    let app = TestApp::new().await;

    let ajaccio = app.register("ajaccio@example.com", "tutor").await;
    let bastia = app.register("bastia@example.com", "tutor").await;
    let ajaccio_id = app.user_id(&ajaccio).await;

    app.request("PUT", "/tutors/me/profile", Some(&ajaccio), Some(json!({
        "postal_code": "20000"
    }))).await;
    app.request("PUT", "/tutors/me/profile", Some(&bastia), Some(json!({
        "postal_code": "20200"
    }))).await;

    let res = app.request("GET", "/search/tutors?zip_code=20100", None, None).await;
    let body = parse_body(res).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["user_id"], ajaccio_id.as_str());
}

#[tokio::test]
async fn test_tutors_without_postal_code_excluded() {
    let app = TestApp::new().await;

    let tutor = app.register("tutor@example.com", "tutor").await;
    // profile exists but carries no postal code
    app.request("PUT", "/tutors/me/profile", Some(&tutor), Some(json!({
        "bio": "No address yet"
    }))).await;

    let res = app.request("GET", "/search/tutors?zip_code=75001", None, None).await;
    let body = parse_body(res).await;
    assert_eq!(body["count"], 0);
}
