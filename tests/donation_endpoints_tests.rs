mod common;

use poem::http::StatusCode;
use serde_json::json;
use thapar_backend::domain::{models::DonationStatus, repositories::DonationRepository};

use common::test_app;

#[tokio::test]
async fn test_donate_records_success() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/donate")
        .body_json(&json!({ "amount": 500, "userEmail": "a@thapar.edu" }))
        .send()
        .await;

    resp.assert_status_is_ok();
    let body = resp.json().await;
    let body = body.value().object();
    body.get("ok").assert_bool(true);
    let donation = body.get("donation").object();
    donation.get("status").assert_string("success");
    donation.get("amount").assert_f64(500.0);
    donation.get("userEmail").assert_string("a@thapar.edu");
}

#[tokio::test]
async fn test_donate_amount_one_creates_exactly_one_record() {
    let app = test_app();

    app.client
        .post("/api/donate")
        .body_json(&json!({ "amount": 1 }))
        .send()
        .await
        .assert_status_is_ok();

    let stored = app.donations.list().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, DonationStatus::Success);
    assert_eq!(stored[0].amount, 1.0);
    assert_eq!(stored[0].user_email, None);
}

#[tokio::test]
async fn test_donate_rejects_non_positive_amounts() {
    let app = test_app();

    for body in [
        json!({ "amount": 0, "userEmail": "a@thapar.edu" }),
        json!({ "amount": -10, "userEmail": "a@thapar.edu" }),
        json!({ "amount": null, "userEmail": "a@thapar.edu" }),
        json!({ "userEmail": "a@thapar.edu" }),
    ] {
        let resp = app.client.post("/api/donate").body_json(&body).send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "Invalid amount" })).await;
    }

    assert_eq!(app.donations.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_donate_does_not_require_registered_user() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/donate")
        .body_json(&json!({ "amount": 25.5, "userEmail": "stranger@example.com" }))
        .send()
        .await;

    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("donation")
        .object()
        .get("amount")
        .assert_f64(25.5);
}

#[tokio::test]
async fn test_donate_accepts_numeric_string_amount() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/donate")
        .body_json(&json!({ "amount": "500", "userEmail": "a@thapar.edu" }))
        .send()
        .await;

    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("donation")
        .object()
        .get("amount")
        .assert_f64(500.0);
}

#[tokio::test]
async fn test_donate_rejects_negative_and_non_numeric_strings() {
    let app = test_app();

    for amount in ["-5", "abc", ""] {
        let resp = app
            .client
            .post("/api/donate")
            .body_json(&json!({ "amount": amount }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "Invalid amount" })).await;
    }

    assert_eq!(app.donations.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_donate_accepts_form_body() {
    let app = test_app();

    let resp = app
        .client
        .post("/api/donate")
        .content_type("application/x-www-form-urlencoded")
        .body("amount=500&userEmail=a%40thapar.edu")
        .send()
        .await;

    resp.assert_status_is_ok();
    let stored = app.donations.list().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].amount, 500.0);
    assert_eq!(stored[0].user_email.as_deref(), Some("a@thapar.edu"));
}
