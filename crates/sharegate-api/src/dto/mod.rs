//! Request payloads.

pub mod request;
