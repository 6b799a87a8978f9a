//! Versioned capability token model and codec.

pub mod codec;
pub mod error;
pub mod v1;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use codec::TokenCodec;
pub use error::{InvalidToken, TokenError};
pub use v1::TokenV1;

/// Version tags understood by this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVersion {
    /// Time-boxed, path-prefix grant.
    V1,
}

impl TokenVersion {
    /// Parses the wire tag, returning `None` for unknown versions.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Self::V1),
            _ => None,
        }
    }

    /// Returns the wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::V1 => "1",
        }
    }
}

/// A decoded capability token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Version 1 payload.
    V1(TokenV1),
}

/// Leading fragment of every serialized payload.
#[derive(Deserialize)]
struct VersionHeader {
    v: String,
}

/// Serialized form: the version tag followed by the variant's fields.
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    v: &'static str,
    #[serde(flatten)]
    payload: &'a T,
}

impl Token {
    /// Instant before which the token is not valid, if any.
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::V1(t) => t.not_before,
        }
    }

    /// Instant after which the token is not valid, if any.
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::V1(t) => t.expiration,
        }
    }

    /// Landing path for the holder after verification.
    pub fn index(&self) -> &str {
        match self {
            Self::V1(t) => &t.index,
        }
    }

    /// Whether the token is not yet valid at `now`.
    pub fn is_pending_at(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::V1(t) => t.is_pending_at(now),
        }
    }

    /// Serializes the token, version tag first.
    pub fn to_json(&self) -> Result<Vec<u8>, TokenError> {
        let bytes = match self {
            Self::V1(t) => serde_json::to_vec(&Tagged {
                v: TokenVersion::V1.tag(),
                payload: t,
            }),
        };
        bytes.map_err(TokenError::Serialization)
    }

    /// Parses a serialized payload by reading the version tag and
    /// dispatching to the matching variant decoder.
    pub fn from_json(bytes: &[u8]) -> Result<Self, TokenError> {
        let header: VersionHeader = serde_json::from_slice(bytes).map_err(TokenError::Malformed)?;

        match TokenVersion::from_tag(&header.v) {
            Some(TokenVersion::V1) => serde_json::from_slice::<TokenV1>(bytes)
                .map(Self::V1)
                .map_err(TokenError::Malformed),
            None => Err(TokenError::UnknownVersion(header.v)),
        }
    }
}

impl From<TokenV1> for Token {
    fn from(token: TokenV1) -> Self {
        Self::V1(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_version_tag_is_serialized() {
        let token = Token::V1(TokenV1::new("/docs").with_paths(["/docs"]));
        let value: serde_json::Value = serde_json::from_slice(&token.to_json().unwrap()).unwrap();
        assert_eq!(value["v"], "1");
        assert_eq!(value["i"], "/docs");
        assert_eq!(value["paths"], serde_json::json!(["/docs"]));
        assert!(value["nbf"].is_null());
        assert!(value["exp"].is_null());
    }

    #[test]
    fn test_json_round_trip() {
        let token = Token::V1(
            TokenV1::new("/docs")
                .with_paths(["/docs", "/api"])
                .with_not_before(Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap())
                .with_expiration(Utc.with_ymd_and_hms(2030, 1, 2, 9, 0, 0).unwrap()),
        );
        let decoded = Token::from_json(&token.to_json().unwrap()).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let err = Token::from_json(br#"{"v":"9","i":"/","paths":[]}"#).unwrap_err();
        assert!(matches!(err, TokenError::UnknownVersion(ref v) if v == "9"));
    }

    #[test]
    fn test_missing_version_is_malformed() {
        let err = Token::from_json(br#"{"i":"/","paths":[]}"#).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_malformed_variant_body() {
        let err = Token::from_json(br#"{"v":"1","i":42}"#).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_null_paths_decode_as_empty() {
        let token = Token::from_json(br#"{"v":"1","nbf":null,"exp":null,"i":"/","paths":null}"#)
            .unwrap();
        let Token::V1(v1) = token;
        assert!(v1.paths.is_empty());
    }
}
