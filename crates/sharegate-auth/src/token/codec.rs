//! Authenticated encryption of capability tokens.
//!
//! Wire format: `base64url_padded(nonce[12] || AES-256-GCM(json))`.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use tracing::{debug, warn};

use sharegate_core::config::token::TokenConfig;
use sharegate_core::result::AppResult;

use super::Token;
use super::error::{InvalidToken, TokenError};

/// Required key length in bytes.
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes for AES-GCM.
pub const NONCE_LEN: usize = 12;

/// Insecure key substituted when none is configured. Local development only.
pub const DEVELOPMENT_KEY: &str = "12345678901234567890123456789012";

/// Encrypts and decrypts capability tokens under a single process-wide key.
///
/// The cipher is built once at construction; encryption and decryption
/// never fail because of key setup afterwards.
#[derive(Clone)]
pub struct TokenCodec {
    cipher: Aes256Gcm,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a codec from exactly [`KEY_LEN`] bytes of key material.
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        if key.len() != KEY_LEN {
            return Err(TokenError::InvalidKey(format!(
                "encryption key must be exactly {KEY_LEN} bytes, got {}",
                key.len()
            )));
        }
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| TokenError::InvalidKey(format!("cipher setup failed: {e}")))?;
        Ok(Self { cipher })
    }

    /// Creates a codec from configuration.
    ///
    /// An absent or empty key falls back to [`DEVELOPMENT_KEY`] with a
    /// warning. A key of the wrong length is a configuration error.
    pub fn from_config(config: &TokenConfig) -> AppResult<Self> {
        let key = match config.encryption_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                warn!("Using default dev key. Do not use in production.");
                DEVELOPMENT_KEY
            }
        };
        Ok(Self::new(key.as_bytes())?)
    }

    /// Serializes, encrypts, and encodes a token.
    pub fn encrypt(&self, token: &Token) -> Result<String, TokenError> {
        let plaintext = token.to_json()?;
        self.seal(&plaintext)
    }

    /// Decodes, decrypts, and parses a token string.
    ///
    /// Every failure cause collapses into [`InvalidToken`].
    pub fn decrypt(&self, raw: &str) -> Result<Token, InvalidToken> {
        self.decode(raw).map_err(|e| {
            debug!(error = %e, "Token rejected");
            InvalidToken
        })
    }

    fn decode(&self, raw: &str) -> Result<Token, TokenError> {
        let plaintext = self.open(raw)?;
        Token::from_json(&plaintext)
    }

    /// Encrypts arbitrary bytes into the token wire format.
    pub(crate) fn seal(&self, plaintext: &[u8]) -> Result<String, TokenError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| TokenError::Encryption)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(nonce.as_slice());
        sealed.extend_from_slice(&ciphertext);
        Ok(URL_SAFE.encode(sealed))
    }

    fn open(&self, raw: &str) -> Result<Vec<u8>, TokenError> {
        let data = URL_SAFE.decode(raw)?;
        if data.len() < NONCE_LEN {
            return Err(TokenError::Truncated);
        }
        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| TokenError::Authentication)
    }
}
