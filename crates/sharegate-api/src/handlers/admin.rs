//! Admin token issuance.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{error, info};

use sharegate_auth::{Token, TokenV1};
use sharegate_core::error::AppError;
use sharegate_core::types::clean;

use crate::dto::request::IssueTokenRequest;
use crate::error::ApiError;
use crate::state::AppState;
use crate::templates;

/// Input format of the form's `datetime-local` fields.
const FORM_DATETIME: &str = "%Y-%m-%dT%H:%M";

/// GET /auth/token
pub async fn form() -> Html<&'static str> {
    Html(templates::admin_form())
}

/// POST /auth/token
pub async fn issue(
    State(state): State<AppState>,
    Form(req): Form<IssueTokenRequest>,
) -> Result<Html<String>, ApiError> {
    let paths = split_paths(&req.paths);
    let not_before = parse_moment(&req.nbf, "nbf")?;
    let expiration = parse_moment(&req.exp, "exp")?;

    let index = req.index.trim();
    if index.is_empty() {
        return Err(AppError::validation("Index path is required").into());
    }

    let mut grant = TokenV1::new(clean(index)).with_paths(paths);
    if let Some(at) = not_before {
        grant = grant.with_not_before(at);
    }
    if let Some(at) = expiration {
        grant = grant.with_expiration(at);
    }
    let token = Token::V1(grant);

    let raw = state.codec.encrypt(&token).map_err(|e| {
        error!(error = %e, "Token encryption failed");
        AppError::internal("Token encryption failed")
    })?;

    info!(
        index = %token.index(),
        not_before = ?token.not_before(),
        expiration = ?token.expiration(),
        "Issued access link"
    );

    Ok(Html(templates::admin_link(&format!(
        "/auth/login?token={raw}"
    ))))
}

/// Splits the comma-separated prefix list. Blank input means no prefixes.
fn split_paths(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|path| path.trim().to_string()).collect()
}

fn parse_moment(raw: &str, field: &str) -> Result<Option<DateTime<Utc>>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, FORM_DATETIME)
        .map(|at| Some(at.and_utc()))
        .map_err(|e| AppError::validation(format!("Invalid {field} value '{raw}': {e}")))
}
