//! Authentication cookie configuration.

use serde::{Deserialize, Serialize};

/// Attributes of the cookie carrying the encrypted token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Whether the `Secure` attribute is set. Must be `true` in production.
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            secure: false,
        }
    }
}

fn default_name() -> String {
    "auth#data".to_string()
}
