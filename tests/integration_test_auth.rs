mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_register_and_me() {
    let app = TestApp::new().await;
    let token = app.register("alice@example.com", "student").await;

    let res = app.request("GET", "/auth/me", Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["role"], "student");
    assert!(body.get("password_hash").is_none(), "password hash must not leak");
}

#[tokio::test]
async fn test_register_normalizes_email() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/auth/register", None, Some(json!({
        "email": "  Bob@Example.COM ",
        "password": "password",
        "first_name": "Bob",
        "last_name": "Builder",
        "role": "tutor"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let token = parse_body(res).await["access_token"].as_str().unwrap().to_string();

    let me = parse_body(app.request("GET", "/auth/me", Some(&token), None).await).await;
    assert_eq!(me["email"], "bob@example.com");
}

#[tokio::test]
async fn test_duplicate_email_conflict() {
    let app = TestApp::new().await;
    app.register("carol@example.com", "student").await;

    let res = app.request("POST", "/auth/register", None, Some(json!({
        "email": "carol@example.com",
        "password": "password",
        "first_name": "Carol",
        "last_name": "Two",
        "role": "tutor"
    }))).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/auth/register", None, Some(json!({
        "email": "dave@example.com",
        "password": "abc",
        "first_name": "Dave",
        "last_name": "Short",
        "role": "student"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.request("POST", "/auth/register", None, Some(json!({
        "email": "dave@example.com",
        "password": "password",
        "first_name": "  ",
        "last_name": "Short",
        "role": "student"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_flow() {
    let app = TestApp::new().await;
    app.register("erin@example.com", "tutor").await;

    let res = app.request("POST", "/auth/token", None, Some(json!({
        "email": "erin@example.com",
        "password": "password"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(parse_body(res).await["access_token"].is_string());

    let res = app.request("POST", "/auth/token", None, Some(json!({
        "email": "erin@example.com",
        "password": "wrong-password"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.request("POST", "/auth/token", None, Some(json!({
        "email": "nobody@example.com",
        "password": "password"
    }))).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_or_missing_token_unauthorized() {
    let app = TestApp::new().await;

    let res = app.request("GET", "/auth/me", Some("not-a-jwt"), None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.request("GET", "/auth/me", None, None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_listing_and_delete() {
    let app = TestApp::new().await;
    let token = app.register("frank@example.com", "student").await;
    let user_id = app.user_id(&token).await;

    let res = app.request("GET", "/users", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let users = parse_body(res).await;
    assert_eq!(users.as_array().unwrap().len(), 1);

    let res = app.request("GET", &format!("/users/{}", user_id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("DELETE", &format!("/users/{}", user_id), None, None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", &format!("/users/{}", user_id), None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.request("DELETE", &format!("/users/{}", user_id), None, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
