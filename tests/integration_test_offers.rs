mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_tutor_creates_offer() {
    let app = TestApp::new().await;
    let tutor = app.register("tutor@example.com", "tutor").await;
    let tutor_id = app.user_id(&tutor).await;

    let res = app.request("POST", "/offers", Some(&tutor), Some(json!({
        "subject": "Python",
        "description": "Beginner friendly",
        "price_hour": 30.0
    }))).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let offer = parse_body(res).await;
    assert_eq!(offer["subject"], "Python");
    assert_eq!(offer["tutor_id"], tutor_id.as_str());
    assert_eq!(offer["price_hour"], 30.0);
}

#[tokio::test]
async fn test_student_cannot_create_offer() {
    let app = TestApp::new().await;
    let student = app.register("student@example.com", "student").await;

    let res = app.request("POST", "/offers", Some(&student), Some(json!({
        "subject": "Python",
        "price_hour": 30.0
    }))).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_offer_creation_requires_auth() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/offers", None, Some(json!({
        "subject": "Python",
        "price_hour": 30.0
    }))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_subject_search_is_case_insensitive() {
    let app = TestApp::new().await;
    let tutor = app.register("tutor@example.com", "tutor").await;

    for subject in ["Python", "Guitar"] {
        let res = app.request("POST", "/offers", Some(&tutor), Some(json!({
            "subject": subject,
            "price_hour": 25.0
        }))).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app.request("GET", "/offers?q=pyth", None, None).await;
    let offers = parse_body(res).await;
    assert_eq!(offers.as_array().unwrap().len(), 1);
    assert_eq!(offers[0]["subject"], "Python");

    let res = app.request("GET", "/offers", None, None).await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_offers_by_tutor() {
    let app = TestApp::new().await;
    let tutor_a = app.register("a@example.com", "tutor").await;
    let tutor_b = app.register("b@example.com", "tutor").await;
    let tutor_a_id = app.user_id(&tutor_a).await;

    app.request("POST", "/offers", Some(&tutor_a), Some(json!({"subject": "Maths", "price_hour": 40.0}))).await;
    app.request("POST", "/offers", Some(&tutor_b), Some(json!({"subject": "Chemistry", "price_hour": 35.0}))).await;

    let res = app.request("GET", &format!("/offers/by-tutor/{}", tutor_a_id), None, None).await;
    let offers = parse_body(res).await;
    assert_eq!(offers.as_array().unwrap().len(), 1);
    assert_eq!(offers[0]["subject"], "Maths");
}
