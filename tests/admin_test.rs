//! Integration tests for admin token issuance.

mod helpers;

use axum::http::{StatusCode, header};
use chrono::{TimeZone, Utc};

use helpers::{ADMIN_AUTH, TestApp};

fn link_token(body: &str) -> &str {
    let start = body.find("token=").unwrap() + "token=".len();
    let rest = &body[start..];
    let end = rest.find('"').unwrap();
    &rest[..end]
}

#[tokio::test]
async fn test_requires_basic_auth() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/token", &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers[header::WWW_AUTHENTICATE],
        "Basic realm=\"local\""
    );

    // root:wrong
    let response = app
        .request("GET", "/auth/token", &[("authorization", "Basic cm9vdDp3cm9uZw==")])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.post_form("/auth/token", "index=/docs", &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_form_page() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/auth/token", &[("authorization", ADMIN_AUTH)])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<form"));
}

#[tokio::test]
async fn test_issue_link() {
    let app = TestApp::new();
    let form = "index=+docs%2F%2Fwelcome+&paths=%2Fdocs%2C+%2Fapi+&nbf=2031-03-01T12%3A30&exp=";

    let response = app
        .post_form("/auth/token", form, &[("authorization", ADMIN_AUTH)])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("/auth/login?token="));

    let token = app.codec.decrypt(link_token(&response.body)).unwrap();
    assert_eq!(token.index(), "/docs/welcome");
    assert_eq!(
        token.not_before(),
        Some(Utc.with_ymd_and_hms(2031, 3, 1, 12, 30, 0).unwrap())
    );
    assert_eq!(token.expiration(), None);
    let sharegate_auth::Token::V1(grant) = token;
    assert_eq!(grant.paths, ["/docs", "/api"]);
}

#[tokio::test]
async fn test_issued_link_verifies() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/auth/token",
            "index=%2Fdocs&paths=%2Fdocs",
            &[("authorization", ADMIN_AUTH)],
        )
        .await;
    let raw = link_token(&response.body).to_string();

    let response = app
        .request("GET", &format!("/auth/login?token={raw}"), &[])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), "/docs");
}

#[tokio::test]
async fn test_index_is_required() {
    let app = TestApp::new();
    let response = app
        .post_form("/auth/token", "index=++&paths=%2Fdocs", &[("authorization", ADMIN_AUTH)])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Index path is required"));
}

#[tokio::test]
async fn test_bad_date_is_rejected() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/auth/token",
            "index=%2Fdocs&exp=next+week",
            &[("authorization", ADMIN_AUTH)],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
