//! `mint`: issue an access link from the command line.

use chrono::{DateTime, Utc};
use clap::Args;

use sharegate_auth::{Token, TokenCodec, TokenV1};
use sharegate_core::error::AppError;
use sharegate_core::types::clean;

/// Arguments for `mint`
#[derive(Debug, Args)]
pub struct MintArgs {
    /// Landing path after verification
    #[arg(short, long)]
    pub index: String,

    /// Allowed path prefix; repeat for several. An empty prefix allows all
    #[arg(short, long = "path")]
    pub paths: Vec<String>,

    /// Start of validity (RFC 3339)
    #[arg(long)]
    pub not_before: Option<DateTime<Utc>>,

    /// End of validity (RFC 3339)
    #[arg(long)]
    pub expires: Option<DateTime<Utc>>,
}

/// Execute `mint`
pub fn execute(args: &MintArgs, codec: &TokenCodec) -> Result<(), AppError> {
    let token = build_token(args)?;
    let Token::V1(grant) = &token;
    if grant.paths.is_empty() {
        tracing::warn!("Token grants no paths; every gated request will be denied");
    }

    let raw = codec.encrypt(&token)?;
    println!("/auth/login?token={raw}");
    Ok(())
}

fn build_token(args: &MintArgs) -> Result<Token, AppError> {
    let index = args.index.trim();
    if index.is_empty() {
        return Err(AppError::validation("Index path is required"));
    }
    if let (Some(nbf), Some(exp)) = (args.not_before, args.expires) {
        if exp < nbf {
            return Err(AppError::validation("--expires is earlier than --not-before"));
        }
    }

    let mut grant = TokenV1::new(clean(index)).with_paths(args.paths.iter().cloned());
    if let Some(at) = args.not_before {
        grant = grant.with_not_before(at);
    }
    if let Some(at) = args.expires {
        grant = grant.with_expiration(at);
    }
    Ok(Token::V1(grant))
}
