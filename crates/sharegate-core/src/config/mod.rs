//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and `SHAREGATE__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod admin;
pub mod app;
pub mod content;
pub mod cookie;
pub mod logging;
pub mod token;

use serde::{Deserialize, Serialize};

use self::admin::AdminConfig;
use self::app::ServerConfig;
use self::content::ContentConfig;
use self::cookie::CookieConfig;
use self::logging::LoggingConfig;
use self::token::TokenConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section has defaults, so an empty configuration yields a runnable
/// (insecure) development setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token key material.
    #[serde(default)]
    pub token: TokenConfig,
    /// Authentication cookie attributes.
    #[serde(default)]
    pub cookie: CookieConfig,
    /// Admin issuance credentials.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Served content roots.
    #[serde(default)]
    pub content: ContentConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default`, an environment-specific overlay
    /// `config/{env}`, and environment variables prefixed with `SHAREGATE`
    /// (`SHAREGATE__TOKEN__ENCRYPTION_KEY`, `SHAREGATE__SERVER__PORT`, ...).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, Self::environment())
    }

    /// Values stay strings until deserialization converts them per field.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("SHAREGATE").separator("__")
    }

    fn load_with(env: &str, environment: config::Environment) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
