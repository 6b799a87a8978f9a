//! Application state shared across all handlers and gates.

use std::sync::Arc;

use sharegate_auth::{AdminCredentials, TokenCodec};
use sharegate_cache::{CachedFileServer, ContentRoot};
use sharegate_core::config::AppConfig;
use sharegate_core::result::AppResult;

use crate::cookie::AuthCookie;
use crate::router::STATIC_MOUNT;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token cipher, immutable after startup
    pub codec: Arc<TokenCodec>,
    /// Authentication cookie policy
    pub cookie: AuthCookie,
    /// Admin identity for the issuance UI
    pub admin: Arc<AdminCredentials>,
    /// Gated content tree
    pub routes: Arc<CachedFileServer>,
    /// Public static assets
    pub assets: Arc<CachedFileServer>,
}

impl AppState {
    /// Builds the state from configuration.
    ///
    /// Fails on a bad key or an unreadable content root.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let codec = Arc::new(TokenCodec::from_config(&config.token)?);
        let cookie = AuthCookie::new(&config.cookie, Arc::clone(&codec));
        let admin = Arc::new(AdminCredentials::from_config(&config.admin));

        let content = &config.content;
        let routes_root = ContentRoot::open(&content.routes_root)?;
        let assets_root = ContentRoot::open(&content.static_root)?;

        tracing::info!(
            routes = %routes_root.path().display(),
            assets = %assets_root.path().display(),
            "Content roots opened"
        );

        let routes = CachedFileServer::new(routes_root, content.index_file.clone());
        let assets = CachedFileServer::new(assets_root, content.index_file.clone())
            .with_mount(STATIC_MOUNT);

        Ok(Self {
            config: Arc::new(config),
            codec,
            cookie,
            admin,
            routes: Arc::new(routes),
            assets: Arc::new(assets),
        })
    }
}
