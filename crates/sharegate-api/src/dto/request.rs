//! Request DTOs for query strings and form bodies.

use serde::Deserialize;

/// Query of `GET /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    /// Encrypted token string.
    pub token: Option<String>,
}

/// Form body of `POST /auth/token`.
///
/// Dates use the `datetime-local` input format `YYYY-MM-DDTHH:MM`, read as
/// UTC. Empty fields are absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueTokenRequest {
    /// Landing path.
    #[serde(default)]
    pub index: String,
    /// Comma-separated path prefixes.
    #[serde(default)]
    pub paths: String,
    /// Start of validity.
    #[serde(default)]
    pub nbf: String,
    /// End of validity.
    #[serde(default)]
    pub exp: String,
}
