//! # sharegate-core
//!
//! Core crate for ShareGate. Contains configuration schemas, request path
//! helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
