//! CLI command definitions and dispatch.

pub mod inspect;
pub mod mint;

use clap::{Parser, Subcommand};

use sharegate_auth::TokenCodec;
use sharegate_core::config::AppConfig;
use sharegate_core::error::AppError;

/// ShareGate: capability links for a private file tree
#[derive(Debug, Parser)]
#[command(name = "sharegate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment, selects `config/{env}.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mint an access link
    Mint(mint::MintArgs),
    /// Decrypt a token and print its contents
    Inspect(inspect::InspectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        let codec = load_codec(&self.env)?;
        match &self.command {
            Commands::Mint(args) => mint::execute(args, &codec),
            Commands::Inspect(args) => inspect::execute(args, &codec),
        }
    }
}

/// Helper: build the token codec from the same configuration as the server
fn load_codec(env: &str) -> Result<TokenCodec, AppError> {
    let config = AppConfig::load(env)?;
    TokenCodec::from_config(&config.token)
}
