/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// AES-GCM IV length in bytes (128 bits, fixed by the envelope format).
pub const AES_GCM_IV_LENGTH: usize = 16;

/// AES-GCM authentication tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// KDF salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// Default PBKDF2 iteration count.
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Minimum password length accepted by the complexity policy.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Random salt bound to one key derivation.
pub type Salt = [u8; SALT_LENGTH];
