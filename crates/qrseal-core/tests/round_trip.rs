//! End-to-end properties of the token transform: round trip, tamper
//! detection, version gating, expiry, and the no-silent-truncation policy.

use chrono::{Duration, Utc};
use qrseal_core::{
    decode_payload, decode_token, encode_payload, encode_token, encrypt, validate_at, CoreConfig,
    Payload, PayloadKind, PayloadRecord, TokenError, ValidationConfig, ENVELOPE_VERSION,
};
use qrseal_crypto::{derive, CryptoError, KdfConfig, SALT_LENGTH};

const PASSWORD: &str = "Abcdef1!2345";

fn fast_config() -> CoreConfig {
    CoreConfig {
        kdf: KdfConfig { iterations: 1_000 },
        ..CoreConfig::default()
    }
}

#[test]
fn scenario_a_text_round_trip_with_fixed_salt() {
    let config = fast_config();
    let salt: [u8; SALT_LENGTH] = hex::decode("000102030405060708090a0b0c0d0e0f")
        .unwrap()
        .try_into()
        .unwrap();
    let key = derive(PASSWORD, &salt, &config.kdf).unwrap();

    let payload = Payload::text("hello");
    let envelope = encrypt(&payload, &key, Some(salt)).unwrap();
    let token = encode_token(&envelope).unwrap();

    let decoded = decode_payload(&token, PASSWORD, &config).unwrap();
    assert_eq!(decoded.kind, PayloadKind::Text);
    assert_eq!(decoded.data, "hello");
    assert!(Utc::now() - decoded.timestamp < Duration::minutes(1));
}

#[test]
fn scenario_b_weak_password_fails_before_any_cipher_work() {
    let err = derive("short", &[0u8; SALT_LENGTH], &KdfConfig::default()).unwrap_err();
    assert!(matches!(err, CryptoError::WeakPassword(_)));

    let err = encode_payload(&Payload::text("hello"), "short", &fast_config()).unwrap_err();
    assert!(matches!(
        err,
        TokenError::Crypto(CryptoError::WeakPassword(_))
    ));
}

#[test]
fn scenario_c_oversized_audio_is_rejected_not_truncated() {
    let config = fast_config();
    let payload = Payload::audio(&vec![0x42u8; 50 * 1024], None, Some("audio/webm".into()));

    match encode_payload(&payload, PASSWORD, &config) {
        Err(TokenError::PayloadTooLarge { size, capacity }) => {
            assert!(size > capacity);
            assert_eq!(capacity, 2953);
        }
        other => panic!("expected PayloadTooLarge, got {other:?}"),
    }
}

#[test]
fn round_trip_preserves_every_field() {
    let config = fast_config();
    let payload = Payload::audio(
        &[0x01, 0x02, 0x03, 0x04],
        Some("en-GB".into()),
        Some("audio/webm".into()),
    );
    let encoded = encode_payload(&payload, PASSWORD, &config).unwrap();
    let decoded = decode_payload(&encoded.token, PASSWORD, &config).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn flipping_any_bit_fails_authentication() {
    let config = fast_config();
    let encoded = encode_payload(&Payload::text("tamper me"), PASSWORD, &config).unwrap();
    let envelope = decode_token(&encoded.token).unwrap();

    // Flip one bit in each protected component.
    for component in 0..3 {
        let mut tampered = envelope.clone();
        match component {
            0 => tampered.ciphertext[0] ^= 0x01,
            1 => tampered.iv[0] ^= 0x01,
            _ => tampered.tag[0] ^= 0x01,
        }
        let token = encode_token(&tampered).unwrap();
        let err = decode_payload(&token, PASSWORD, &config).unwrap_err();
        assert!(
            matches!(err, TokenError::Crypto(CryptoError::AuthenticationFailed)),
            "component {component}"
        );
    }
}

#[test]
fn version_gate_beats_a_correct_key() {
    let config = fast_config();
    let encoded = encode_payload(&Payload::text("hello"), PASSWORD, &config).unwrap();
    let mut envelope = decode_token(&encoded.token).unwrap();
    envelope.version = "1.0".to_string();
    let token = encode_token(&envelope).unwrap();

    let err = decode_payload(&token, PASSWORD, &config).unwrap_err();
    assert!(matches!(
        err,
        TokenError::UnsupportedVersion { expected, got }
            if expected == ENVELOPE_VERSION && got == "1.0"
    ));
}

#[test]
fn stale_payload_expires_even_with_a_valid_tag() {
    let config = fast_config();
    let mut payload = Payload::text("old news");
    payload.timestamp = Utc::now() - Duration::hours(49);

    let encoded = encode_payload(&payload, PASSWORD, &config).unwrap();
    let err = decode_payload(&encoded.token, PASSWORD, &config).unwrap_err();
    assert!(matches!(err, TokenError::ExpiredToken { .. }));
}

#[test]
fn fresh_payload_inside_the_window_is_accepted() {
    let config = fast_config();
    let mut payload = Payload::text("still good");
    payload.timestamp = Utc::now() - Duration::hours(47);

    let encoded = encode_payload(&payload, PASSWORD, &config).unwrap();
    assert!(decode_payload(&encoded.token, PASSWORD, &config).is_ok());
}

#[test]
fn expiry_respects_a_custom_window() {
    let now = Utc::now();
    let record = PayloadRecord {
        kind: "text".to_string(),
        data: "x".to_string(),
        voice: None,
        mime_type: None,
        timestamp: now - Duration::minutes(11),
    };
    let config = ValidationConfig {
        max_age: Duration::minutes(10),
    };
    assert!(matches!(
        validate_at(record, now, &config),
        Err(TokenError::ExpiredToken { .. })
    ));
}

#[test]
fn successful_tokens_are_never_shortened() {
    let config = fast_config();
    // Near the ceiling but fitting: the token must carry the full body.
    let body = "x".repeat(1800);
    let encoded = encode_payload(&Payload::text(body.clone()), PASSWORD, &config).unwrap();
    assert!(encoded.token.len() <= encoded.symbol.capacity());

    let decoded = decode_payload(&encoded.token, PASSWORD, &config).unwrap();
    assert_eq!(decoded.data.len(), 1800);
    assert_eq!(decoded.data, body);
}

#[test]
fn oversized_text_is_rejected_not_truncated() {
    let config = fast_config();
    let body = "x".repeat(4000);
    let err = encode_payload(&Payload::text(body), PASSWORD, &config).unwrap_err();
    assert!(matches!(err, TokenError::PayloadTooLarge { .. }));
}

#[test]
fn token_is_self_contained_json() {
    let config = fast_config();
    let encoded = encode_payload(&Payload::text("hello"), PASSWORD, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded.token).unwrap();
    for field in ["ct", "iv", "tg", "v", "slt"] {
        assert!(value.get(field).is_some(), "missing {field}");
    }
    assert_eq!(value["v"], ENVELOPE_VERSION);
}

#[test]
fn decode_failures_are_deterministic() {
    let config = fast_config();
    let encoded = encode_payload(&Payload::text("hello"), PASSWORD, &config).unwrap();

    // Same wrong inputs, same outcome: retrying cannot change the result.
    for _ in 0..2 {
        let err = decode_payload(&encoded.token, "Wrong9!passwd", &config).unwrap_err();
        assert!(matches!(
            err,
            TokenError::Crypto(CryptoError::AuthenticationFailed)
        ));
    }
}
