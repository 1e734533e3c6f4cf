//! Secure random token generation

use super::key_derivation::fill_random;
use crate::error::{SealError, SealResult};

/// Default token length in bytes (64 hex characters)
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Generate a random hex token from `length` secure random bytes
///
/// The result is `2 * length` lowercase hex characters. Uniqueness is not
/// tracked here; callers needing it must check their own storage.
pub fn generate_token(length: usize) -> SealResult<String> {
    if length == 0 {
        return Err(SealError::Crypto(
            "token length must be positive".to_string(),
        ));
    }

    let mut bytes = vec![0u8; length];
    fill_random(&mut bytes)?;
    tracing::trace!(length, "generated token");

    Ok(hex::encode(bytes))
}
