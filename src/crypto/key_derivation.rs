//! Key derivation using PBKDF2-HMAC-SHA512
//!
//! Stretches a password into a 32-byte AES-256 key. The parameters are fixed:
//! changing any of them makes previously sealed packages unreadable.

use std::fmt;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SealError, SealResult};

/// Length of the derived AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Length of the random PBKDF2 salt in bytes
pub const SALT_LEN: usize = 64;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A derived encryption key
///
/// Lives for the duration of a single encrypt or decrypt call and is wiped
/// when dropped. Intentionally not `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an encryption key from a password and salt
///
/// Any password is accepted, including the empty string.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = DerivedKey { key: [0u8; KEY_LEN] };
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.key);
    key
}

/// Fill a buffer from the operating system's secure random source
pub(crate) fn fill_random(buf: &mut [u8]) -> SealResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SealError::Crypto(format!("Secure random source unavailable: {}", e)))
}

/// Generate a fresh random salt
pub fn generate_salt() -> SealResult<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    fill_random(&mut salt)?;
    Ok(salt)
}
