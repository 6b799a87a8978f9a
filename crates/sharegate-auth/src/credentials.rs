//! HTTP Basic credentials for the admin issuance UI.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use sharegate_core::config::admin::AdminConfig;

/// Credentials decoded from a Basic `Authorization` header.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    /// Username
    pub username: String,
    /// Password (plaintext from header)
    pub password: String,
}

impl BasicCredentials {
    /// Parses an `Authorization` header value of the `Basic` scheme.
    pub fn parse(header: &str) -> Result<Self, CredentialError> {
        let encoded = header
            .strip_prefix("Basic ")
            .ok_or(CredentialError::NotBasicAuth)?;

        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|_| CredentialError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialError::InvalidEncoding)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(CredentialError::InvalidFormat)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// The single admin identity allowed to mint tokens.
///
/// Only SHA-256 digests are kept. Presented credentials are hashed and
/// compared in constant time.
#[derive(Clone)]
pub struct AdminCredentials {
    username: [u8; 32],
    password: [u8; 32],
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials").finish_non_exhaustive()
    }
}

impl AdminCredentials {
    /// Creates the admin identity from plaintext values.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: digest(username),
            password: digest(password),
        }
    }

    /// Resolves the admin identity from configuration, with defaults.
    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(&config.resolved_username(), &config.resolved_password())
    }

    /// Checks presented credentials. Both fields are always compared.
    pub fn verify(&self, presented: &BasicCredentials) -> bool {
        let user_ok = digest(&presented.username).as_slice().ct_eq(self.username.as_slice());
        let pass_ok = digest(&presented.password).as_slice().ct_eq(self.password.as_slice());
        (user_ok & pass_ok).into()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Basic-auth parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// Not a Basic auth scheme
    #[error("Not Basic authentication")]
    NotBasicAuth,

    /// Base64 decoding failed
    #[error("Invalid base64 encoding")]
    InvalidEncoding,

    /// Credentials format invalid (missing colon)
    #[error("Invalid credentials format")]
    InvalidFormat,
}
