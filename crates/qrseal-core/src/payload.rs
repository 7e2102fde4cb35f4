//! Payload model: what gets sealed inside an envelope.
//!
//! Record JSON: `{"type": "text"|"audio", "data": string, "voice"?,
//! "mimeType"?, "timestamp": RFC 3339}`. Audio data is the base64 encoding
//! of the raw captured bytes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qrseal_crypto::base64_encode;

/// Content type carried by a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Text,
    Audio,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Text => "text",
            PayloadKind::Audio => "audio",
        }
    }
}

/// A validated payload, constructed at capture time and consumed by the
/// envelope codec. The core keeps no copy once it is sealed.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub kind: PayloadKind,
    /// Non-empty content body. For audio, base64 of the raw bytes.
    pub data: String,
    pub voice: Option<String>,
    pub mime_type: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Payload {
    /// Text payload stamped with the current time.
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            data: data.into(),
            voice: None,
            mime_type: None,
            timestamp: Utc::now(),
        }
    }

    /// Audio payload from raw captured bytes. The bytes are base64-bound
    /// into `data` (~4/3 size growth).
    pub fn audio(bytes: &[u8], voice: Option<String>, mime_type: Option<String>) -> Self {
        Self {
            kind: PayloadKind::Audio,
            data: base64_encode(bytes),
            voice,
            mime_type,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn to_record(&self) -> PayloadRecord {
        PayloadRecord {
            kind: self.kind.as_str().to_string(),
            data: self.data.clone(),
            voice: self.voice.clone(),
            mime_type: self.mime_type.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// Decrypted-but-unvalidated wire shape. `type` stays a raw string so the
/// validator can distinguish an unknown type from a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(rename = "mimeType", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub timestamp: DateTime<Utc>,
}
