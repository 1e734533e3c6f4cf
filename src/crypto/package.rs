//! Encrypted package layout
//!
//! A package is the only artifact a caller stores or transmits:
//!
//! ```text
//! offset  0: salt        (64 bytes)
//! offset 64: iv          (16 bytes)
//! offset 80: auth tag    (16 bytes)
//! offset 96: ciphertext  (remainder)
//! ```
//!
//! The concatenation is base64 encoded (standard alphabet, padded). There is
//! no version byte; the layout is fixed.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use super::key_derivation::SALT_LEN;
use crate::error::{SealError, SealResult};

/// Length of the AES-GCM initialization vector in bytes
pub const IV_LEN: usize = 16;

/// Length of the AES-GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Length of the fixed header preceding the ciphertext
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

const IV_OFFSET: usize = SALT_LEN;
const TAG_OFFSET: usize = IV_OFFSET + IV_LEN;

/// A parsed encrypted package
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedPackage {
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl EncryptedPackage {
    /// Assemble a package from its parts
    pub fn new(
        salt: [u8; SALT_LEN],
        iv: [u8; IV_LEN],
        tag: [u8; TAG_LEN],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            iv,
            tag,
            ciphertext,
        }
    }

    /// Random PBKDF2 salt (offset 0)
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// AES-GCM initialization vector (offset 64)
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    /// GCM authentication tag (offset 80)
    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    /// Encrypted payload (offset 96 to the end)
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Length of the plaintext this package decrypts to
    ///
    /// GCM is a stream mode, so this equals the ciphertext length.
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len()
    }

    /// Consume the package, returning the ciphertext buffer
    pub(crate) fn into_ciphertext(self) -> Vec<u8> {
        self.ciphertext
    }

    /// Serialize to the raw `salt ‖ iv ‖ tag ‖ ciphertext` byte layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse the raw byte layout
    pub fn from_bytes(bytes: &[u8]) -> SealResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(SealError::Decoding(format!(
                "Package too short: expected at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let mut salt = [0u8; SALT_LEN];
        let mut iv = [0u8; IV_LEN];
        let mut tag = [0u8; TAG_LEN];
        salt.copy_from_slice(&bytes[..IV_OFFSET]);
        iv.copy_from_slice(&bytes[IV_OFFSET..TAG_OFFSET]);
        tag.copy_from_slice(&bytes[TAG_OFFSET..HEADER_LEN]);

        Ok(Self {
            salt,
            iv,
            tag,
            ciphertext: bytes[HEADER_LEN..].to_vec(),
        })
    }

    /// Encode to the external base64 representation
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode from the external base64 representation
    pub fn decode(encoded: &str) -> SealResult<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| SealError::Decoding(format!("Invalid package encoding: {}", e)))?;
        Self::from_bytes(&bytes)
    }
}

impl FromStr for EncryptedPackage {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for EncryptedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for EncryptedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedPackage")
            .field("salt_len", &self.salt.len())
            .field("iv_len", &self.iv.len())
            .field("tag_len", &self.tag.len())
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncryptedPackage {
        EncryptedPackage::new([0x11; SALT_LEN], [0x22; IV_LEN], [0x33; TAG_LEN], vec![0x44; 5])
    }

    #[test]
    fn test_header_len() {
        assert_eq!(HEADER_LEN, 96);
    }

    #[test]
    fn test_byte_layout_offsets() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes.len(), 101);
        assert!(bytes[0..64].iter().all(|&b| b == 0x11));
        assert!(bytes[64..80].iter().all(|&b| b == 0x22));
        assert!(bytes[80..96].iter().all(|&b| b == 0x33));
        assert!(bytes[96..].iter().all(|&b| b == 0x44));
    }

    #[test]
    fn test_from_bytes_splits_fields() {
        let mut raw = Vec::new();
        raw.extend((0..96u8).collect::<Vec<_>>());
        raw.extend_from_slice(b"cipher");

        let package = EncryptedPackage::from_bytes(&raw).unwrap();
        assert_eq!(package.salt()[0], 0);
        assert_eq!(package.salt()[63], 63);
        assert_eq!(package.iv()[0], 64);
        assert_eq!(package.tag()[0], 80);
        assert_eq!(package.tag()[15], 95);
        assert_eq!(package.ciphertext(), b"cipher");
        assert_eq!(package.plaintext_len(), 6);
    }

    #[test]
    fn test_header_only_is_valid() {
        let package = EncryptedPackage::from_bytes(&[0u8; HEADER_LEN]).unwrap();
        assert!(package.ciphertext().is_empty());
    }

    #[test]
    fn test_too_short_is_decoding_error() {
        let err = EncryptedPackage::from_bytes(&[0u8; HEADER_LEN - 1]).unwrap_err();
        assert!(err.is_decoding());
        assert!(err.to_string().contains("got 95"));
    }

    #[test]
    fn test_invalid_base64_is_decoding_error() {
        let err = EncryptedPackage::decode("not base64 at all!").unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_encoded_form_parses_back() {
        let package = sample();
        let parsed: EncryptedPackage = package.to_string().parse().unwrap();
        assert_eq!(parsed, package);
    }

    #[test]
    fn test_debug_shows_only_lengths() {
        let debug = format!("{:?}", sample());
        assert_eq!(
            debug,
            "EncryptedPackage { salt_len: 64, iv_len: 16, tag_len: 16, ciphertext_len: 5 }"
        );
    }
}
