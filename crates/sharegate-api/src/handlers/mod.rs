//! HTTP request handlers.

pub mod admin;
pub mod content;
pub mod countdown;
pub mod verify;
