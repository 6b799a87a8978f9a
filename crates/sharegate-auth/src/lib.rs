//! # sharegate-auth
//!
//! Capability tokens and the decisions made over them.
//!
//! ## Modules
//!
//! - `token`: versioned token model and the AES-256-GCM codec
//! - `authorize`: time-window and path-prefix decision engine
//! - `credentials`: HTTP Basic credentials for the admin issuance UI

pub mod authorize;
pub mod credentials;
pub mod token;

pub use authorize::decide;
pub use credentials::{AdminCredentials, BasicCredentials, CredentialError};
pub use token::{InvalidToken, Token, TokenCodec, TokenError, TokenV1, TokenVersion};
