//! Capability token key configuration.

use serde::{Deserialize, Serialize};

/// Symmetric key material for the token codec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Exactly 32 bytes of key text. When unset the development key is used.
    #[serde(default)]
    pub encryption_key: Option<String>,
}
