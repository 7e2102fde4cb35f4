use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Unsupported envelope version: expected {expected}, got {got:?}")]
    UnsupportedVersion {
        expected: &'static str,
        got: String,
    },

    #[error("Token expired: payload is {age_hours}h old (max {max_hours}h)")]
    ExpiredToken { age_hours: i64, max_hours: i64 },

    #[error("Unsupported payload type: {0:?}")]
    UnsupportedType(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payload too large: token is {size} bytes, capacity is {capacity}")]
    PayloadTooLarge { size: usize, capacity: usize },

    #[error("Crypto error: {0}")]
    Crypto(#[from] qrseal_crypto::CryptoError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
