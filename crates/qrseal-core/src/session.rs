//! Caller-owned session context for one mode activation.
//!
//! Replaces the ambient "current recorder / current scanner" globals with
//! an explicit value: a single-writer key-material slot, an ordered list
//! of release actions, and transfer-phase tracking. Failures always land
//! the phase back on `Idle`.

use qrseal_crypto::{DerivedKey, Salt};

use crate::config::CoreConfig;
use crate::error::TokenError;
use crate::payload::Payload;
use crate::pipeline::{self, EncodedToken};

/// Where a transfer currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferPhase {
    #[default]
    Idle,
    Capturing,
    Encoding,
    Rendered,
    Decoding,
    Validated,
    Displayed,
}

type ReleaseAction = Box<dyn FnOnce() + Send>;

/// Session context owned by the caller and threaded through each mode
/// activation. Key material is single-writer: installing or clearing
/// requires `&mut self`, and a replaced key is zeroized on drop.
pub struct Session {
    config: CoreConfig,
    key: Option<(DerivedKey, Salt)>,
    phase: TransferPhase,
    release_actions: Vec<(String, ReleaseAction)>,
}

impl Session {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            key: None,
            phase: TransferPhase::Idle,
            release_actions: Vec::new(),
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn phase(&self) -> TransferPhase {
        self.phase
    }

    /// Install session key material together with its derivation salt,
    /// replacing any previous key.
    pub fn set_key(&mut self, key: DerivedKey, salt: Salt) {
        self.key = Some((key, salt));
    }

    pub fn key_material(&self) -> Option<(&DerivedKey, &Salt)> {
        self.key.as_ref().map(|(key, salt)| (key, salt))
    }

    /// Wipe the held key material.
    pub fn clear_key(&mut self) {
        self.key = None;
    }

    /// Register a teardown action. [`release`](Self::release) runs actions
    /// in registration order.
    pub fn defer_release(&mut self, label: impl Into<String>, action: impl FnOnce() + Send + 'static) {
        self.release_actions.push((label.into(), Box::new(action)));
    }

    /// Run all release actions in registration order, then clear key
    /// material and reset the phase.
    pub fn release(&mut self) {
        for (label, action) in self.release_actions.drain(..) {
            tracing::debug!(%label, "running release action");
            action();
        }
        self.key = None;
        self.phase = TransferPhase::Idle;
    }

    /// Mark capture started (recording in progress, text being typed).
    pub fn begin_capture(&mut self) {
        self.phase = TransferPhase::Capturing;
    }

    /// Encode through the pipeline, tracking the transfer phase. Uses the
    /// held key when one is installed (the salt stays out-of-band with the
    /// session), otherwise derives from `password` with a fresh embedded
    /// salt.
    pub fn encode(&mut self, payload: &Payload, password: &str) -> Result<EncodedToken, TokenError> {
        self.phase = TransferPhase::Encoding;
        let result = match &self.key {
            Some((key, _)) => pipeline::encode_with_key(payload, key, None, &self.config),
            None => pipeline::encode_payload(payload, password, &self.config),
        };
        match result {
            Ok(encoded) => {
                self.phase = TransferPhase::Rendered;
                Ok(encoded)
            }
            Err(e) => {
                self.phase = TransferPhase::Idle;
                Err(e)
            }
        }
    }

    /// Decode through the pipeline, tracking the transfer phase. An
    /// envelope-carried salt is combined with `password`; a saltless
    /// envelope falls back to the held session key.
    pub fn decode(&mut self, token: &str, password: &str) -> Result<Payload, TokenError> {
        self.phase = TransferPhase::Decoding;
        let result = self.decode_inner(token, password);
        match result {
            Ok(payload) => {
                self.phase = TransferPhase::Validated;
                Ok(payload)
            }
            Err(e) => {
                self.phase = TransferPhase::Idle;
                Err(e)
            }
        }
    }

    fn decode_inner(&self, token: &str, password: &str) -> Result<Payload, TokenError> {
        let envelope = crate::envelope::decode_token(token)?;
        match (envelope.salt, &self.key) {
            (Some(salt), _) => {
                let key = qrseal_crypto::derive(password, &salt, &self.config.kdf)?;
                pipeline::decrypt_and_validate(&envelope, &key, &self.config)
            }
            (None, Some((key, _))) => pipeline::decrypt_and_validate(&envelope, key, &self.config),
            (None, None) => Err(TokenError::MalformedEnvelope(
                "salt not carried in envelope and no session key held".into(),
            )),
        }
    }

    /// Mark the validated payload as handed to the display.
    pub fn mark_displayed(&mut self) {
        self.phase = TransferPhase::Displayed;
    }
}
