//! Enforces the token's time window and path grants.

use axum::http::request::Parts;
use axum::response::IntoResponse;
use chrono::Utc;

use sharegate_auth::decide;
use sharegate_core::error::AppError;
use sharegate_core::types::{decode, normalize};

use crate::cookie::AuthCookie;
use crate::error::ApiError;

use super::gate::{Gate, GateDecision};

/// Forbids requests without a token that permits the requested path now.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    cookie: AuthCookie,
}

impl AuthorizationGate {
    pub fn new(cookie: AuthCookie) -> Self {
        Self { cookie }
    }
}

impl Gate for AuthorizationGate {
    fn name(&self) -> &'static str {
        "authorization"
    }

    fn inspect(&self, parts: &Parts) -> GateDecision {
        let Some(token) = self.cookie.extract(&parts.headers) else {
            return forbidden();
        };
        // Decided over the decoded, dot-free path the content server will read.
        let Some(path) = decode(parts.uri.path()).map(|path| normalize(&path)) else {
            return forbidden();
        };

        if decide(&token, &path, Utc::now()) {
            GateDecision::Forward
        } else {
            tracing::debug!(path = %path, index = %token.index(), "Access denied");
            forbidden()
        }
    }
}

fn forbidden() -> GateDecision {
    GateDecision::Respond(ApiError(AppError::authorization("Access denied")).into_response())
}
