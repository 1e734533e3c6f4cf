//! Cryptographic functions for sealkit
//!
//! Stateless free functions: password-based AES-256-GCM sealing with
//! PBKDF2-HMAC-SHA512 key derivation, random hex tokens and SHA-256 digests.
//! Algorithms and parameters are fixed; packages carry no version byte.

pub mod digest;
pub mod encryption;
pub mod key_derivation;
pub mod package;
pub mod secure_memory;
pub mod token;

pub use digest::{hash_sha256, hash_sha256_bytes};
pub use encryption::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};
pub use key_derivation::{derive_key, DerivedKey, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use package::{EncryptedPackage, HEADER_LEN, IV_LEN, TAG_LEN};
pub use secure_memory::SecureString;
pub use token::{generate_token, DEFAULT_TOKEN_LENGTH};
