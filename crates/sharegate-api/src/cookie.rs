//! The authentication cookie carrying the encrypted token.

use std::sync::Arc;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;

use sharegate_auth::{Token, TokenCodec};
use sharegate_core::config::cookie::CookieConfig;

/// Reads and writes the cookie that holds a raw token string.
#[derive(Debug, Clone)]
pub struct AuthCookie {
    name: String,
    secure: bool,
    codec: Arc<TokenCodec>,
}

impl AuthCookie {
    /// Creates the cookie policy from configuration.
    pub fn new(config: &CookieConfig, codec: Arc<TokenCodec>) -> Self {
        Self {
            name: config.name.clone(),
            secure: config.secure,
            codec,
        }
    }

    /// Decodes the token carried by the request's cookie.
    ///
    /// A missing cookie and an undecodable one both yield `None`.
    pub fn extract(&self, headers: &HeaderMap) -> Option<Token> {
        let jar = CookieJar::from_headers(headers);
        let cookie = jar.get(&self.name)?;
        self.codec.decrypt(cookie.value()).ok()
    }

    /// Builds the cookie for `raw`, expiring with the token when it has an
    /// expiration and lasting for the session otherwise.
    pub fn issue(&self, raw: String, token: &Token) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), raw))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure);

        if let Some(expiration) = token.expiration() {
            if let Ok(at) = OffsetDateTime::from_unix_timestamp(expiration.timestamp()) {
                cookie = cookie.expires(at);
            }
        }

        cookie.build()
    }
}
