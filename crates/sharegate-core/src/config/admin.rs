//! Admin token-issuance credentials.

use serde::{Deserialize, Serialize};

/// Fallback used for both username and password when unset.
pub const DEFAULT_ADMIN_CREDENTIAL: &str = "admin";

/// HTTP Basic credentials guarding the issuance UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin username.
    #[serde(default)]
    pub username: Option<String>,
    /// Admin password.
    #[serde(default)]
    pub password: Option<String>,
    /// Basic-auth realm announced in challenges.
    #[serde(default = "default_realm")]
    pub realm: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            realm: default_realm(),
        }
    }
}

impl AdminConfig {
    /// Resolves the configured username, warning when the default applies.
    pub fn resolved_username(&self) -> String {
        resolve(self.username.as_deref(), "username")
    }

    /// Resolves the configured password, warning when the default applies.
    pub fn resolved_password(&self) -> String {
        resolve(self.password.as_deref(), "password")
    }
}

fn resolve(value: Option<&str>, field: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            tracing::warn!(
                field,
                "Using default admin {}. Do not use in production.",
                field
            );
            DEFAULT_ADMIN_CREDENTIAL.to_string()
        }
    }
}

fn default_realm() -> String {
    "local".to_string()
}
