//! Token verification: exchanges a link token for the authentication cookie.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, warn};

use sharegate_core::error::AppError;
use sharegate_core::types::{clean, encode};

use crate::dto::request::VerifyQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /auth/login?token=...
pub async fn verify(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), ApiError> {
    let raw = query
        .token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::validation("Missing token"))?;

    let token = state.codec.decrypt(&raw).map_err(|e| {
        warn!(error = %e, "Verification failed");
        AppError::validation("Invalid token")
    })?;

    let location = clean(token.index());
    info!(index = %location, "Token verified");

    let cookie = state.cookie.issue(raw, &token);
    Ok((jar.add(cookie), Redirect::to(&encode(&location))))
}
