//! Cryptographic primitives for QR transport tokens: password policy,
//! PBKDF2 key derivation, and AES-256-GCM sealing with a detached tag.

pub mod aes_gcm;
pub mod base64;
pub mod error;
pub mod kdf;
pub mod password;
pub mod types;

pub use aes_gcm::{generate_iv, open, seal, SealedBox};
pub use base64::{base64_decode, base64_encode};
pub use error::CryptoError;
pub use kdf::{derive, generate_salt, DerivedKey, KdfConfig};
pub use password::validate_password;
pub use types::{
    Salt, AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, DEFAULT_KDF_ITERATIONS,
    MIN_PASSWORD_LENGTH, SALT_LENGTH,
};
