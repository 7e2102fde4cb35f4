//! Post-decryption payload validation: freshness, type, shape.

use chrono::{DateTime, Duration, Utc};

use crate::error::TokenError;
use crate::payload::{Payload, PayloadKind, PayloadRecord};

/// Default freshness window in hours. Bounds the usefulness of a leaked or
/// reused physical barcode.
pub const DEFAULT_MAX_AGE_HOURS: i64 = 48;

/// Freshness policy for incoming payloads.
#[derive(Debug, Clone, Copy)]
pub struct ValidationConfig {
    pub max_age: Duration,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::hours(DEFAULT_MAX_AGE_HOURS),
        }
    }
}

/// Validate a decrypted record against the schema and freshness policy.
pub fn validate(record: PayloadRecord, config: &ValidationConfig) -> Result<Payload, TokenError> {
    validate_at(record, Utc::now(), config)
}

/// [`validate`] with an explicit clock.
pub fn validate_at(
    record: PayloadRecord,
    now: DateTime<Utc>,
    config: &ValidationConfig,
) -> Result<Payload, TokenError> {
    let age = now - record.timestamp;
    if age > config.max_age {
        return Err(TokenError::ExpiredToken {
            age_hours: age.num_hours(),
            max_hours: config.max_age.num_hours(),
        });
    }

    let kind = match record.kind.as_str() {
        "text" => PayloadKind::Text,
        "audio" => PayloadKind::Audio,
        other => return Err(TokenError::UnsupportedType(other.to_string())),
    };

    if record.data.is_empty() {
        return Err(TokenError::MalformedPayload(
            "data must be a non-empty string".into(),
        ));
    }

    Ok(Payload {
        kind,
        data: record.data,
        voice: record.voice,
        mime_type: record.mime_type,
        timestamp: record.timestamp,
    })
}
