//! Explicit configuration for the encode/decode pipeline.

use qrseal_crypto::KdfConfig;

use crate::budget::SizeBudget;
use crate::validate::ValidationConfig;

/// Configuration threaded through every pipeline call. There is no static
/// state; two sides of a transfer must agree on `kdf` for derivation to
/// line up.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreConfig {
    pub kdf: KdfConfig,
    pub budget: SizeBudget,
    pub validation: ValidationConfig,
}
