//! One-call encode/decode units.
//!
//! Encode: preflight → derive (fresh salt) → encrypt → token → budget fit.
//! Decode: parse token → derive (envelope salt) → decrypt → validate.
//!
//! Each call is a pure function of its inputs; every failure aborts with a
//! typed error and nothing is retried.

use tracing::debug;

use qrseal_crypto::{derive, generate_salt, DerivedKey, Salt};

use crate::budget::{estimate_token_len, SymbolConfig};
use crate::codec;
use crate::config::CoreConfig;
use crate::envelope::{decode_token, encode_token, Envelope};
use crate::error::TokenError;
use crate::payload::Payload;
use crate::validate::validate;

/// A transport token sized for a concrete symbol.
#[derive(Debug, Clone)]
pub struct EncodedToken {
    pub token: String,
    pub symbol: SymbolConfig,
}

/// Pre-encryption size check for a payload, assuming an envelope-carried
/// salt. Rejecting an oversized recording here skips the KDF stretch.
pub fn preflight(payload: &Payload, config: &CoreConfig) -> Result<SymbolConfig, TokenError> {
    let plaintext_len = serde_json::to_vec(&payload.to_record())?.len();
    config
        .budget
        .fit(estimate_token_len(plaintext_len, true))
}

/// Encrypt a payload into a budget-checked, self-contained transport token.
///
/// Generates a fresh salt, derives the key from `password`, and carries the
/// salt in the envelope so the token alone (plus the password) suffices to
/// decode.
pub fn encode_payload(
    payload: &Payload,
    password: &str,
    config: &CoreConfig,
) -> Result<EncodedToken, TokenError> {
    preflight(payload, config)?;
    let salt = generate_salt();
    let key = derive(password, &salt, &config.kdf)?;
    encode_with_key(payload, &key, Some(salt), config)
}

/// [`encode_payload`] with a caller-held key. Pass `salt` to embed the
/// key's true derivation salt, or `None` when it travels out-of-band.
pub fn encode_with_key(
    payload: &Payload,
    key: &DerivedKey,
    salt: Option<Salt>,
    config: &CoreConfig,
) -> Result<EncodedToken, TokenError> {
    let envelope = codec::encrypt(payload, key, salt)?;
    let token = encode_token(&envelope)?;
    let symbol = config.budget.fit(token.len())?;
    debug!(
        token_len = token.len(),
        symbol_version = symbol.version,
        kind = payload.kind.as_str(),
        "token fits symbol"
    );

    Ok(EncodedToken { token, symbol })
}

/// Decode and validate a scanned token using the password and the
/// envelope-carried salt.
pub fn decode_payload(
    token: &str,
    password: &str,
    config: &CoreConfig,
) -> Result<Payload, TokenError> {
    let envelope = decode_token(token)?;
    let salt = require_salt(&envelope)?;
    let key = derive(password, &salt, &config.kdf)?;
    decrypt_and_validate(&envelope, &key, config)
}

/// Decode with a caller-held key, for envelopes whose salt lives
/// out-of-band.
pub fn decode_with_key(
    token: &str,
    key: &DerivedKey,
    config: &CoreConfig,
) -> Result<Payload, TokenError> {
    let envelope = decode_token(token)?;
    decrypt_and_validate(&envelope, key, config)
}

pub(crate) fn require_salt(envelope: &Envelope) -> Result<Salt, TokenError> {
    envelope.salt.ok_or_else(|| {
        TokenError::MalformedEnvelope("salt not carried in envelope and no session key held".into())
    })
}

pub(crate) fn decrypt_and_validate(
    envelope: &Envelope,
    key: &DerivedKey,
    config: &CoreConfig,
) -> Result<Payload, TokenError> {
    let record = codec::decrypt(envelope, key)?;
    let payload = validate(record, &config.validation)?;
    debug!(kind = payload.kind.as_str(), "token decoded and validated");
    Ok(payload)
}
