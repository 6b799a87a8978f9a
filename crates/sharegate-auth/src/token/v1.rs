//! Version 1 token payload: a validity window plus allowed path prefixes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Time-boxed grant over a set of literal path prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenV1 {
    /// Not valid before this instant.
    #[serde(rename = "nbf", default)]
    pub not_before: Option<DateTime<Utc>>,
    /// Not valid after this instant.
    #[serde(rename = "exp", default)]
    pub expiration: Option<DateTime<Utc>>,
    /// Default landing page.
    #[serde(rename = "i")]
    pub index: String,
    /// Allowed path prefixes. Matched literally, never as globs.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub paths: Vec<String>,
}

impl TokenV1 {
    /// Creates an unbounded token landing on `index` with no allowed paths.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            not_before: None,
            expiration: None,
            index: index.into(),
            paths: Vec::new(),
        }
    }

    /// Replaces the allowed path prefixes.
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the start of the validity window.
    pub fn with_not_before(mut self, at: DateTime<Utc>) -> Self {
        self.not_before = Some(at);
        self
    }

    /// Sets the end of the validity window.
    pub fn with_expiration(mut self, at: DateTime<Utc>) -> Self {
        self.expiration = Some(at);
        self
    }

    /// `now` is before `not_before`.
    pub fn is_pending_at(&self, now: DateTime<Utc>) -> bool {
        self.not_before.is_some_and(|nbf| now < nbf)
    }

    /// `now` is after `expiration`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|exp| now > exp)
    }

    /// Whether any allowed pattern is a literal prefix of `path`.
    ///
    /// Matching is byte-wise and not segment-aware: `"/docs"` also admits
    /// `"/docsecret"`.
    pub fn allows_path(&self, path: &str) -> bool {
        self.paths.iter().any(|pattern| path.starts_with(pattern.as_str()))
    }

    /// Full decision for this variant.
    pub fn permits(&self, path: &str, now: DateTime<Utc>) -> bool {
        if self.is_pending_at(now) || self.is_expired_at(now) {
            return false;
        }
        self.allows_path(path)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
