//! SHA-256 content fingerprints
//!
//! Unsalted and single-pass: suitable for integrity checks and content
//! addressing, never for storing passwords.

use sha2::{Digest, Sha256};

/// Hash raw bytes, returning 64 lowercase hex characters
pub fn hash_sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Hash a string's UTF-8 bytes, returning 64 lowercase hex characters
pub fn hash_sha256(data: &str) -> String {
    hash_sha256_bytes(data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash_sha256("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash_sha256(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_sha256("hello world"), hash_sha256("hello world"));
        assert_ne!(hash_sha256(""), hash_sha256("abc"));
    }

    #[test]
    fn test_string_and_bytes_agree() {
        let text = "naïve café";
        assert_eq!(hash_sha256(text), hash_sha256_bytes(text.as_bytes()));
        assert_eq!(hash_sha256(text).len(), 64);
    }
}
