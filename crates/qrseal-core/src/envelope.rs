//! Envelope ↔ transport-token wire conversion.
//!
//! Wire JSON: `{"ct": base64, "iv": base64 (16 bytes), "tg": base64 (16
//! bytes), "v": version, "slt": base64 (16 bytes, optional)}`. Pure,
//! lossless conversion; no crypto here.

use serde::{Deserialize, Serialize};

use qrseal_crypto::{
    base64_decode, base64_encode, Salt, AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, SALT_LENGTH,
};

use crate::error::TokenError;

/// The single currently supported envelope schema version.
pub const ENVELOPE_VERSION: &str = "2.1";

/// One encrypted payload: ciphertext plus the metadata needed to open it.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; AES_GCM_IV_LENGTH],
    pub tag: [u8; AES_GCM_TAG_LENGTH],
    /// Derivation salt when it travels with the envelope; `None` when the
    /// caller's session supplies it out-of-band.
    pub salt: Option<Salt>,
    pub version: String,
}

#[derive(Serialize, Deserialize)]
struct TokenWire {
    ct: String,
    iv: String,
    tg: String,
    v: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slt: Option<String>,
}

/// Encode an envelope as a transport-token string.
pub fn encode_token(envelope: &Envelope) -> Result<String, TokenError> {
    let wire = TokenWire {
        ct: base64_encode(&envelope.ciphertext),
        iv: base64_encode(&envelope.iv),
        tg: base64_encode(&envelope.tag),
        v: envelope.version.clone(),
        slt: envelope.salt.as_ref().map(|s| base64_encode(s)),
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Decode a scanned/uploaded token string back into an envelope.
///
/// Fails `MalformedEnvelope` when any of `ct`/`iv`/`tg`/`v` is absent, not
/// valid base64, or the wrong raw length. `slt` is optional.
pub fn decode_token(token: &str) -> Result<Envelope, TokenError> {
    let wire: TokenWire = serde_json::from_str(token)
        .map_err(|e| TokenError::MalformedEnvelope(e.to_string()))?;

    let ciphertext = decode_field(&wire.ct, "ct")?;
    let iv = fixed_field::<AES_GCM_IV_LENGTH>(&wire.iv, "iv")?;
    let tag = fixed_field::<AES_GCM_TAG_LENGTH>(&wire.tg, "tg")?;
    let salt = wire
        .slt
        .as_deref()
        .map(|s| fixed_field::<SALT_LENGTH>(s, "slt"))
        .transpose()?;

    Ok(Envelope {
        ciphertext,
        iv,
        tag,
        salt,
        version: wire.v,
    })
}

fn decode_field(value: &str, field: &str) -> Result<Vec<u8>, TokenError> {
    base64_decode(value)
        .map_err(|e| TokenError::MalformedEnvelope(format!("field {field}: {e}")))
}

fn fixed_field<const N: usize>(value: &str, field: &str) -> Result<[u8; N], TokenError> {
    let bytes = decode_field(value, field)?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        TokenError::MalformedEnvelope(format!(
            "field {field}: expected {N} bytes, got {}",
            b.len()
        ))
    })
}
