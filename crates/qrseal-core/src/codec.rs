//! Envelope encrypt/decrypt.
//!
//! Encrypt: payload record → JSON plaintext → AES-256-GCM seal → versioned
//! envelope. Decrypt: version gate → open → payload record. The version
//! check runs before any cipher work.

use qrseal_crypto::{open, seal, DerivedKey, Salt};

use crate::envelope::{Envelope, ENVELOPE_VERSION};
use crate::error::TokenError;
use crate::payload::{Payload, PayloadRecord};

/// Encrypt a payload into a versioned envelope.
///
/// `salt` must be the true derivation salt of `key`; pass `Some` to carry
/// it in the envelope, `None` when the caller's session supplies it
/// out-of-band. A salt that does not match the key produces an envelope
/// that can never be decrypted from its own fields.
pub fn encrypt(
    payload: &Payload,
    key: &DerivedKey,
    salt: Option<Salt>,
) -> Result<Envelope, TokenError> {
    let record = payload.to_record();
    let plaintext = serde_json::to_vec(&record)?;
    let sealed = seal(key, &plaintext)?;

    Ok(Envelope {
        ciphertext: sealed.ciphertext,
        iv: sealed.iv,
        tag: sealed.tag,
        salt,
        version: ENVELOPE_VERSION.to_string(),
    })
}

/// Decrypt an envelope into an unvalidated payload record.
///
/// Rejects `UnsupportedVersion` before any cipher work; tag mismatch is
/// `AuthenticationFailed`; a recovered plaintext missing required fields
/// is `MalformedEnvelope`.
pub fn decrypt(envelope: &Envelope, key: &DerivedKey) -> Result<PayloadRecord, TokenError> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(TokenError::UnsupportedVersion {
            expected: ENVELOPE_VERSION,
            got: envelope.version.clone(),
        });
    }

    let plaintext = open(key, &envelope.iv, &envelope.ciphertext, &envelope.tag)?;
    serde_json::from_slice(&plaintext)
        .map_err(|e| TokenError::MalformedEnvelope(format!("payload record: {e}")))
}
