//! Shared value types.

pub mod path;

pub use path::{clean, decode, encode, normalize, split_last};
