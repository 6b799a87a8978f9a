//! # sharegate-api
//!
//! HTTP layer for ShareGate built on Axum.
//!
//! Provides the token verification and countdown endpoints, the admin
//! issuance UI, the gate pipeline (countdown redirect, then authorization)
//! in front of the gated content tree, and error mapping.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
mod templates;

pub use app::build_app;
pub use state::AppState;
