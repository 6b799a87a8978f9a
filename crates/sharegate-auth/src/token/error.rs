//! Token codec errors.

use sharegate_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Detailed cause of a token encode or decode failure.
///
/// Decode causes never cross the codec boundary; callers only observe
/// [`InvalidToken`].
#[derive(Debug, Error)]
pub enum TokenError {
    /// The key is not exactly 32 bytes or the cipher rejected it.
    #[error("invalid encryption key: {0}")]
    InvalidKey(String),

    /// The payload could not be serialized.
    #[error("failed to serialize token: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The AEAD seal operation failed.
    #[error("token encryption failed")]
    Encryption,

    /// The outer base64 layer is invalid.
    #[error("invalid token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The decoded bytes are shorter than a nonce.
    #[error("ciphertext too short")]
    Truncated,

    /// Authentication tag mismatch: wrong key or tampered bytes.
    #[error("token authentication failed")]
    Authentication,

    /// The decrypted payload is not a well-formed token structure.
    #[error("invalid token payload: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The payload carries a version tag this build does not know.
    #[error("unknown token version \"{0}\"")]
    UnknownVersion(String),
}

/// Uniform decode failure surfaced to every caller of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token")]
pub struct InvalidToken;

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidKey(_) => {
                AppError::with_source(ErrorKind::Configuration, err.to_string(), err)
            }
            TokenError::Serialization(_) => {
                AppError::with_source(ErrorKind::Serialization, err.to_string(), err)
            }
            TokenError::Encryption => AppError::internal(err.to_string()),
            _ => AppError::authentication("Invalid token"),
        }
    }
}

impl From<InvalidToken> for AppError {
    fn from(_: InvalidToken) -> Self {
        AppError::authentication("Invalid token")
    }
}
