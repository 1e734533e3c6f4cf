//! CLI command handlers
//!
//! Bridges clap argument parsing with the crypto functions. Handlers return a
//! `CommandOutput`; printing is left to `main`.

pub mod fingerprint;
pub mod input;
pub mod output;
pub mod seal;
pub mod setup;

pub use fingerprint::{handle_hash, handle_token, HashArgs, TokenArgs};
pub use input::PasswordArgs;
pub use output::CommandOutput;
pub use seal::{handle_decrypt, handle_encrypt, handle_inspect, DecryptArgs, EncryptArgs, InspectArgs};
pub use setup::{handle_config, handle_init, InitArgs};
