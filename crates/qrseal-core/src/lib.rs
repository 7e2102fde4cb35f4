//! Envelope subsystem for encrypted QR transport tokens: payload model,
//! authenticated envelope codec, freshness validation, size budgeting, and
//! the caller-owned session context.

pub mod budget;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod session;
pub mod validate;

pub use budget::{
    base64_len, estimate_token_len, max_capacity, EcLevel, SizeBudget, SymbolConfig, MAX_VERSION,
    MIN_VERSION,
};
pub use codec::{decrypt, encrypt};
pub use config::CoreConfig;
pub use envelope::{decode_token, encode_token, Envelope, ENVELOPE_VERSION};
pub use error::TokenError;
pub use payload::{Payload, PayloadKind, PayloadRecord};
pub use pipeline::{
    decode_payload, decode_with_key, encode_payload, encode_with_key, preflight, EncodedToken,
};
pub use session::{Session, TransferPhase};
pub use validate::{validate, validate_at, ValidationConfig, DEFAULT_MAX_AGE_HOURS};
