//! AES-256-GCM encryption/decryption
//!
//! Password-based authenticated encryption. Every call draws a fresh salt and
//! IV and derives its own key, so sealing the same text twice never yields the
//! same package.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;
use zeroize::{Zeroize, Zeroizing};

use super::key_derivation::{derive_key, fill_random, generate_salt, DerivedKey, SALT_LEN};
use super::package::{EncryptedPackage, IV_LEN, TAG_LEN};
use crate::error::{SealError, SealResult};

/// AES-256-GCM with a 128-bit IV
type Aes256Gcm16 = AesGcm<Aes256, U16>;

fn cipher_for(key: &DerivedKey) -> SealResult<Aes256Gcm16> {
    Aes256Gcm16::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::Crypto(format!("Failed to create cipher: {}", e)))
}

/// Encrypt raw bytes under a password, returning an encoded package
pub fn encrypt_bytes(plaintext: &[u8], password: &str) -> SealResult<String> {
    let salt = generate_salt()?;
    let mut iv = [0u8; IV_LEN];
    fill_random(&mut iv)?;

    let package = seal_with(plaintext, password, salt, iv)?;
    tracing::debug!(plaintext_len = plaintext.len(), "sealed package");

    Ok(package.encode())
}

/// Seal with caller-chosen salt and IV
///
/// Deterministic for fixed inputs; a salt/IV pair must never be reused.
fn seal_with(
    plaintext: &[u8],
    password: &str,
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
) -> SealResult<EncryptedPackage> {
    let key = derive_key(password, &salt);
    let cipher = cipher_for(&key)?;

    let mut buffer = Zeroizing::new(plaintext.to_vec());
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&iv), b"", &mut buffer)
        .map_err(|e| SealError::Crypto(format!("Encryption failed: {}", e)))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok(EncryptedPackage::new(
        salt,
        iv,
        tag_bytes,
        std::mem::take(&mut *buffer),
    ))
}

/// Encrypt a string under a password, returning an encoded package
pub fn encrypt(plaintext: &str, password: &str) -> SealResult<String> {
    encrypt_bytes(plaintext.as_bytes(), password)
}

/// Decrypt an encoded package to raw bytes
///
/// Either the full plaintext is returned or an error; nothing partial.
pub fn decrypt_bytes(package: &str, password: &str) -> SealResult<Vec<u8>> {
    let package = EncryptedPackage::decode(package)?;

    let key = derive_key(password, package.salt());
    let cipher = cipher_for(&key)?;

    let iv = *package.iv();
    let tag = *package.tag();
    let mut buffer = package.into_ciphertext();

    if cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(&iv),
            b"",
            &mut buffer,
            GenericArray::from_slice(&tag),
        )
        .is_err()
    {
        tracing::debug!("package failed authentication");
        return Err(SealError::Authentication);
    }

    tracing::debug!(plaintext_len = buffer.len(), "opened package");
    Ok(buffer)
}

/// Decrypt an encoded package to a string
pub fn decrypt(package: &str, password: &str) -> SealResult<String> {
    let plaintext = decrypt_bytes(package, password)?;
    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        SealError::Decoding("Decrypted data is not valid UTF-8".to_string())
    })
}
