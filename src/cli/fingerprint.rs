//! Token and hash commands

use clap::Args;

use super::input::read_value;
use super::output::CommandOutput;
use crate::config::settings::Settings;
use crate::crypto::{generate_token, hash_sha256};
use crate::error::SealResult;

/// Arguments for `sealkit token`
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Number of random bytes (the token is twice as many hex characters)
    #[arg(short, long)]
    pub length: Option<usize>,
}

/// Arguments for `sealkit hash`
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Text to hash (reads stdin when omitted or "-")
    pub text: Option<String>,
}

/// Generate a random hex token
pub fn handle_token(args: TokenArgs, settings: &Settings) -> SealResult<CommandOutput> {
    let length = args.length.unwrap_or(settings.token_length);
    let token = generate_token(length)?;
    Ok(CommandOutput::new(token.clone())
        .field("token", token)
        .field("length", length))
}

/// Print the SHA-256 digest of the input
pub fn handle_hash(args: HashArgs) -> SealResult<CommandOutput> {
    let data = read_value(args.text)?;
    let digest = hash_sha256(&data);
    Ok(CommandOutput::new(digest.clone()).field("sha256", digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_uses_settings_default() {
        let mut settings = Settings::default();
        settings.token_length = 8;
        let out = handle_token(TokenArgs { length: None }, &settings).unwrap();
        assert_eq!(out.text().len(), 16);
    }

    #[test]
    fn test_token_length_flag_overrides() {
        let out = handle_token(TokenArgs { length: Some(4) }, &Settings::default()).unwrap();
        assert_eq!(out.text().len(), 8);
    }

    #[test]
    fn test_token_zero_length_fails() {
        let err = handle_token(TokenArgs { length: Some(0) }, &Settings::default()).unwrap_err();
        assert!(err.is_crypto());
    }

    #[test]
    fn test_hash() {
        let out = handle_hash(HashArgs {
            text: Some("abc".into()),
        })
        .unwrap();
        assert_eq!(
            out.text(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
