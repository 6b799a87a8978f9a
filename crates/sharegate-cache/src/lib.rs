//! # sharegate-cache
//!
//! Serves a bounded file tree from memory. Each resource is read from disk
//! once, on its first request, and kept for the life of the process:
//!
//! - **store**: concurrent path → [`CacheEntry`] map
//! - **root**: containment-checked access to a directory on disk
//! - **server**: path canonicalization, redirects, and cache-or-load
//! - **negotiate**: conditional and range responses over cached bytes
//!
//! There is no eviction, no size limit, and no invalidation. A file changed
//! on disk after it was cached keeps being served with its old content.

pub mod negotiate;
pub mod root;
pub mod server;
pub mod store;

pub use root::ContentRoot;
pub use server::CachedFileServer;
pub use store::{CacheEntry, ContentStore};
