//! The waiting page for tokens that are not valid yet.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::extractors::CookieToken;
use crate::templates;

/// GET /countdown
pub async fn countdown(CookieToken(token): CookieToken) -> Response {
    let Some(token) = token else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let unix_seconds = token.not_before().map_or(0, |at| at.timestamp());
    Html(templates::countdown(token.index(), unix_seconds)).into_response()
}
