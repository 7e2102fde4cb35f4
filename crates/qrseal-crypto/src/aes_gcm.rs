//! AES-256-GCM sealing with a 16-byte IV and detached tag.
//!
//! The envelope wire format carries ciphertext, IV, and tag as separate
//! fields, so `seal` splits the tag off the AEAD output and `open` joins
//! them back before verification. The IV is 128 bits, fixed by the
//! transport token format.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};

use crate::error::CryptoError;
use crate::kdf::DerivedKey;
use crate::types::{AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH};

/// AES-256-GCM with a 128-bit nonce.
type Cipher = AesGcm<Aes256, U16>;

/// Output of [`seal`]: IV, ciphertext, and authentication tag as separate
/// fields, matching the envelope layout.
#[derive(Debug, Clone)]
pub struct SealedBox {
    pub iv: [u8; AES_GCM_IV_LENGTH],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; AES_GCM_TAG_LENGTH],
}

/// Generate a random 16-byte IV.
pub fn generate_iv() -> [u8; AES_GCM_IV_LENGTH] {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).expect("getrandom failed");
    iv
}

/// Encrypt-then-tag under a fresh random IV.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<SealedBox, CryptoError> {
    let cipher = Cipher::new(key.as_bytes().into());
    let iv = generate_iv();
    let nonce = Nonce::<U16>::from_slice(&iv);

    let mut sealed = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    // AEAD output is ciphertext || tag; detach the tag.
    let split = sealed.len() - AES_GCM_TAG_LENGTH;
    let tag_bytes = sealed.split_off(split);
    let mut tag = [0u8; AES_GCM_TAG_LENGTH];
    tag.copy_from_slice(&tag_bytes);

    Ok(SealedBox {
        iv,
        ciphertext: sealed,
        tag,
    })
}

/// Verify the tag and decrypt.
///
/// Tag mismatch (tampering or a wrong key) fails `AuthenticationFailed`
/// and is terminal for the given inputs.
pub fn open(
    key: &DerivedKey,
    iv: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if iv.len() != AES_GCM_IV_LENGTH {
        return Err(CryptoError::InvalidIvLength {
            expected: AES_GCM_IV_LENGTH,
            got: iv.len(),
        });
    }
    if tag.len() != AES_GCM_TAG_LENGTH {
        return Err(CryptoError::InvalidTagLength {
            expected: AES_GCM_TAG_LENGTH,
            got: tag.len(),
        });
    }

    let cipher = Cipher::new(key.as_bytes().into());
    let nonce = Nonce::<U16>::from_slice(iv);

    let mut joined = Vec::with_capacity(ciphertext.len() + AES_GCM_TAG_LENGTH);
    joined.extend_from_slice(ciphertext);
    joined.extend_from_slice(tag);

    cipher
        .decrypt(nonce, joined.as_ref())
        .map_err(|_| CryptoError::AuthenticationFailed)
}
