mod common;

use poem::http::StatusCode;
use serde_json::json;
use thapar_backend::domain::repositories::UserRepository;

use common::test_app;

#[tokio::test]
async fn test_root_and_health() {
    let app = test_app();

    let resp = app.client.get("/").send().await;
    resp.assert_status_is_ok();
    resp.assert_text("OK").await;

    let resp = app.client.get("/health").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({ "ok": true })).await;
}

#[tokio::test]
async fn test_register_creates_user() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/register")
        .body_json(&json!({ "email": "a@thapar.edu", "name": "A" }))
        .send()
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let body = body.value().object();
    body.get("ok").assert_bool(true);
    let user = body.get("user").object();
    user.get("email").assert_string("a@thapar.edu");
    user.get("name").assert_string("A");
    assert!(!user.get("createdAt").string().is_empty());
}

#[tokio::test]
async fn test_register_twice_updates_in_place() {
    let app = test_app();

    let first = app
        .client
        .post("/api/register")
        .body_json(&json!({ "email": "a@thapar.edu", "name": "A" }))
        .send()
        .await;
    first.assert_status(StatusCode::CREATED);
    let first_body = first.json().await;
    let first_id = first_body
        .value()
        .object()
        .get("user")
        .object()
        .get("id")
        .string()
        .to_string();

    let second = app
        .client
        .post("/api/register")
        .body_json(&json!({ "email": "a@thapar.edu", "name": "B" }))
        .send()
        .await;
    second.assert_status(StatusCode::CREATED);
    let body = second.json().await;
    let user = body.value().object().get("user").object();
    user.get("name").assert_string("B");
    user.get("id").assert_string(&first_id);

    assert_eq!(app.users.count_by_email("a@thapar.edu").await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_rejects_foreign_domains() {
    let app = test_app();

    for email in [
        json!("a@gmail.com"),
        json!("a@thapar.edu.evil.com"),
        json!("@thapar.edu"),
        json!("a@b@thapar.edu"),
        json!(""),
    ] {
        let resp = app
            .client
            .post("/api/register")
            .body_json(&json!({ "email": email, "name": "X" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "Only @thapar.edu emails allowed" }))
            .await;

        let email = email.as_str().unwrap();
        assert_eq!(app.users.count_by_email(email).await.unwrap(), 0);
    }
}

#[tokio::test]
async fn test_register_without_email_is_rejected() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/register")
        .body_json(&json!({ "name": "Nobody" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_json(json!({ "error": "Only @thapar.edu emails allowed" }))
        .await;
}

#[tokio::test]
async fn test_malformed_json_reports_error_body() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/register")
        .content_type("application/json")
        .body("{\"email\":")
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = resp.json().await;
    assert!(!body.value().object().get("error").string().is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/login")
        .body_json(&json!({ "email": "ghost@thapar.edu" }))
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_json(json!({ "error": "User not found" })).await;
}

#[tokio::test]
async fn test_login_returns_stored_record() {
    let app = test_app();

    app.client
        .post("/api/register")
        .body_json(&json!({ "email": "a@thapar.edu", "name": "A" }))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = app
        .client
        .post("/api/login")
        .body_json(&json!({
            "email": "a@thapar.edu",
            "name": "Impostor",
            "password": "irrelevant"
        }))
        .send()
        .await;

    resp.assert_status_is_ok();
    let body = resp.json().await;
    let body = body.value().object();
    body.get("ok").assert_bool(true);
    let user = body.get("user").object();
    user.get("email").assert_string("a@thapar.edu");
    user.get("name").assert_string("A");
}

#[tokio::test]
async fn test_register_and_login_accept_form_bodies() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/register")
        .content_type("application/x-www-form-urlencoded")
        .body("email=a%40thapar.edu&name=A")
        .send()
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body = resp.json().await;
    let user = body.value().object().get("user").object();
    user.get("email").assert_string("a@thapar.edu");
    user.get("name").assert_string("A");
    assert_eq!(app.users.count_by_email("a@thapar.edu").await.unwrap(), 1);

    let resp = app
        .client
        .post("/api/login")
        .content_type("application/x-www-form-urlencoded")
        .body("email=a%40thapar.edu")
        .send()
        .await;

    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("user")
        .object()
        .get("name")
        .assert_string("A");
}
