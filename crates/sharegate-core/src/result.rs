//! Convenience result type alias for ShareGate.

use crate::error::AppError;

/// A specialized `Result` type for ShareGate operations.
pub type AppResult<T> = Result<T, AppError>;
