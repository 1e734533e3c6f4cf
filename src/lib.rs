//! sealkit - password-based sealing of sensitive values
//!
//! This library protects values before they are stored or transmitted. It
//! provides four stateless operations:
//!
//! - [`crypto::encrypt`] / [`crypto::decrypt`]: AES-256-GCM under a key
//!   derived from a password with PBKDF2-HMAC-SHA512 (100 000 iterations).
//!   The result is one self-describing base64 package:
//!   `salt (64) ‖ iv (16) ‖ tag (16) ‖ ciphertext`.
//! - [`crypto::generate_token`]: random hex tokens.
//! - [`crypto::hash_sha256`]: hex SHA-256 fingerprints.
//!
//! # Architecture
//!
//! - `crypto`: the operations, package layout and key handling
//! - `error`: the error type shared by everything
//! - `config`: settings for the command-line front end
//! - `cli`: command handlers used by the `sealkit` binary
//!
//! # Example
//!
//! ```rust
//! use sealkit::crypto::{decrypt, encrypt};
//!
//! let package = encrypt("hello world", "correct-password")?;
//! assert_eq!(decrypt(&package, "correct-password")?, "hello world");
//! assert!(decrypt(&package, "wrong-password").unwrap_err().is_authentication());
//! # Ok::<(), sealkit::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;

pub use error::{SealError, SealResult};
