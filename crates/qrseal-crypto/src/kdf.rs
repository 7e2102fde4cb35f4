//! PBKDF2-HMAC-SHA512 password key derivation.
//!
//! Deterministic: identical (password, salt, iterations) always reproduce
//! the same key, which is what lets decrypt work without re-transmitting
//! key material.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;
use crate::password::validate_password;
use crate::types::{Salt, AES_KEY_LENGTH, DEFAULT_KDF_ITERATIONS, SALT_LENGTH};

/// KDF parameters, passed explicitly at each call site.
#[derive(Debug, Clone, Copy)]
pub struct KdfConfig {
    /// PBKDF2 iteration count. Both sides of a transfer must agree on it
    /// for derivation to line up.
    pub iterations: u32,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

/// A 256-bit symmetric key derived from a password. Zeroized on drop and
/// never serialized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; AES_KEY_LENGTH],
}

impl DerivedKey {
    /// Create a key from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != AES_KEY_LENGTH {
            return Err(CryptoError::InvalidKeyMaterial {
                expected: AES_KEY_LENGTH,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; AES_KEY_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the key as a byte slice.
    ///
    /// # Security
    /// Avoid logging or persisting the returned bytes.
    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey([REDACTED])")
    }
}

/// Generate a random 16-byte salt for a fresh envelope.
///
/// A salt must never be reused with a different password; reuse would allow
/// cross-envelope key correlation.
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt).expect("getrandom failed");
    salt
}

/// Derive a 256-bit key from a password and salt.
///
/// Validates password complexity first; a rejected password fails
/// `WeakPassword` before any cryptographic work runs.
pub fn derive(password: &str, salt: &Salt, config: &KdfConfig) -> Result<DerivedKey, CryptoError> {
    validate_password(password)?;
    if config.iterations == 0 {
        return Err(CryptoError::KdfFailed(
            "iteration count must be >= 1".into(),
        ));
    }

    let mut bytes = [0u8; AES_KEY_LENGTH];
    pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt, config.iterations, &mut bytes)
        .map_err(|e| CryptoError::KdfFailed(e.to_string()))?;
    Ok(DerivedKey { bytes })
}
