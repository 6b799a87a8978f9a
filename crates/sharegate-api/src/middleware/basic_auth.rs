//! HTTP Basic authentication for the admin issuance routes.

use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use sharegate_auth::{AdminCredentials, BasicCredentials};

use super::gate::{Gate, GateDecision};

/// Challenges requests that do not carry the admin credentials.
#[derive(Debug, Clone)]
pub struct BasicAuthGate {
    credentials: Arc<AdminCredentials>,
    challenge: HeaderValue,
}

impl BasicAuthGate {
    pub fn new(credentials: Arc<AdminCredentials>, realm: &str) -> Self {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        Self {
            credentials,
            challenge,
        }
    }

    fn unauthorized(&self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, self.challenge.clone())],
        )
            .into_response()
    }
}

impl Gate for BasicAuthGate {
    fn name(&self) -> &'static str {
        "basic-auth"
    }

    fn inspect(&self, parts: &Parts) -> GateDecision {
        let presented = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| BasicCredentials::parse(value).ok());

        match presented {
            Some(presented) if self.credentials.verify(&presented) => GateDecision::Forward,
            Some(presented) => {
                tracing::warn!(username = %presented.username, "Rejected admin credentials");
                GateDecision::Respond(self.unauthorized())
            }
            None => GateDecision::Respond(self.unauthorized()),
        }
    }
}
