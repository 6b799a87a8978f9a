//! Redirects holders of a not-yet-valid token to the countdown page.

use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect};
use chrono::Utc;

use crate::cookie::AuthCookie;

use super::gate::{Gate, GateDecision};

/// Location of the countdown page.
pub const COUNTDOWN_PATH: &str = "/countdown";

/// Sends requests carrying a pending token to [`COUNTDOWN_PATH`].
///
/// Never blocks: requests without a usable token are forwarded untouched.
#[derive(Debug, Clone)]
pub struct CountdownGate {
    cookie: AuthCookie,
}

impl CountdownGate {
    pub fn new(cookie: AuthCookie) -> Self {
        Self { cookie }
    }
}

impl Gate for CountdownGate {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn inspect(&self, parts: &Parts) -> GateDecision {
        match self.cookie.extract(&parts.headers) {
            Some(token) if token.is_pending_at(Utc::now()) => {
                GateDecision::Respond(Redirect::to(COUNTDOWN_PATH).into_response())
            }
            _ => GateDecision::Forward,
        }
    }
}
