//! `inspect`: decrypt a token and print it as JSON.

use clap::Args;

use sharegate_auth::TokenCodec;
use sharegate_core::error::AppError;

/// Arguments for `inspect`
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Raw token, or a full `/auth/login?token=...` link
    pub token: String,
}

/// Execute `inspect`
pub fn execute(args: &InspectArgs, codec: &TokenCodec) -> Result<(), AppError> {
    let raw = strip_link(&args.token);
    let token = codec.decrypt(raw)?;

    let value: serde_json::Value = serde_json::from_slice(&token.to_json()?)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn strip_link(input: &str) -> &str {
    let input = input.trim();
    match input.split_once("token=") {
        Some((_, raw)) => raw.split('&').next().unwrap_or(raw),
        None => input,
    }
}
