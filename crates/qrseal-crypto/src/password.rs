//! Password complexity policy.
//!
//! Checked before any KDF work so a rejected password never pays the
//! PBKDF2 stretch cost.

use crate::error::CryptoError;
use crate::types::MIN_PASSWORD_LENGTH;

/// Validate a password against the complexity policy.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters and one character
/// from each of four classes: lowercase, uppercase, digit, symbol.
pub fn validate_password(password: &str) -> Result<(), CryptoError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CryptoError::WeakPassword(
            "must be at least 12 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(CryptoError::WeakPassword("missing a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(CryptoError::WeakPassword("missing an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CryptoError::WeakPassword("missing a digit"));
    }
    if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        return Err(CryptoError::WeakPassword("missing a symbol"));
    }
    Ok(())
}
