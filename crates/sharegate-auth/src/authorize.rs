//! Authorization decisions over decoded tokens.

use chrono::{DateTime, Utc};

use crate::token::Token;

/// Decides whether `token` grants access to `request_path` at `now`.
///
/// Denies before `not_before` and after `expiration`; otherwise allows when
/// any allowed pattern is a literal prefix of the path.
pub fn decide(token: &Token, request_path: &str, now: DateTime<Utc>) -> bool {
    match token {
        Token::V1(v1) => v1.permits(request_path, now),
    }
}
