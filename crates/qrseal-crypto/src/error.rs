use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Weak password: {0}")]
    WeakPassword(&'static str),

    #[error("Invalid key material: expected {expected} bytes, got {got}")]
    InvalidKeyMaterial { expected: usize, got: usize },

    #[error("Invalid salt length: expected {expected} bytes, got {got}")]
    InvalidSaltLength { expected: usize, got: usize },

    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Invalid tag length: expected {expected} bytes, got {got}")]
    InvalidTagLength { expected: usize, got: usize },

    #[error("Key derivation failed: {0}")]
    KdfFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Authentication failed: tag mismatch")]
    AuthenticationFailed,
}
