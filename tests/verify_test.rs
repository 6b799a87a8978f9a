//! Integration tests for link verification.

mod helpers;

use axum::http::{StatusCode, header};
use chrono::{Duration, Utc};
use sharegate_auth::TokenV1;

use helpers::TestApp;

#[tokio::test]
async fn test_missing_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/auth/login", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Missing token"));

    let response = app.request("GET", "/auth/login?token=", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_token_sets_no_cookie() {
    let app = TestApp::new();
    let response = app.request("GET", "/auth/login?token=bm9wZQ==", &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Invalid token"));
    assert!(response.headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_token_from_other_key_is_rejected() {
    let app = TestApp::new();
    let other = sharegate_auth::TokenCodec::new(b"ffffffffffffffffffffffffffffffff").unwrap();
    let raw = other
        .encrypt(&sharegate_auth::Token::V1(TokenV1::new("/docs").with_paths(["/docs"])))
        .unwrap();

    let response = app
        .request("GET", &format!("/auth/login?token={raw}"), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_valid_token_sets_cookie_and_redirects_to_index() {
    let app = TestApp::new();
    let raw = app.mint(TokenV1::new("docs/./guide/").with_paths(["/docs"]));

    let response = app
        .request("GET", &format!("/auth/login?token={raw}"), &[])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), "/docs/guide");

    let set_cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));
    assert!(!set_cookie.contains("Expires"));
}

#[tokio::test]
async fn test_cookie_expiry_follows_token() {
    let app = TestApp::new();
    let raw = app.mint(
        TokenV1::new("/docs")
            .with_paths(["/docs"])
            .with_expiration(Utc::now() + Duration::days(2)),
    );

    let response = app
        .request("GET", &format!("/auth/login?token={raw}"), &[])
        .await;
    let set_cookie = response.headers[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("Expires="));
}

#[tokio::test]
async fn test_issued_cookie_opens_gated_content() {
    let app = TestApp::new();
    let raw = app.mint(TokenV1::new("/docs").with_paths(["/docs"]));

    let verified = app
        .request("GET", &format!("/auth/login?token={raw}"), &[])
        .await;
    let cookie = verified.cookie_pair().unwrap();

    let response = app
        .request("GET", "/docs/readme.txt", &[("cookie", cookie.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "read me");
}
