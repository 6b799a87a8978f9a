//! `CookieToken` extractor: the token carried by the authentication cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use sharegate_auth::Token;

use crate::state::AppState;

/// The decoded token from the request's cookie, if any.
///
/// Never rejects; a missing and an invalid cookie are both `None`.
#[derive(Debug, Clone)]
pub struct CookieToken(pub Option<Token>);

impl FromRequestParts<AppState> for CookieToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.cookie.extract(&parts.headers)))
    }
}
