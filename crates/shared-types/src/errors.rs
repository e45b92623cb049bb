//! Shared type errors.

use thiserror::Error;

/// Validation errors raised while constructing shared domain types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Public key bytes do not match the expected length for the curve
    #[error("invalid {curve} public key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Curve the key claimed to be on
        curve: &'static str,
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Signature bytes have the wrong length
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Claim text is missing the signed-message prefix, is not valid JSON,
    /// or carries the wrong purpose tag
    #[error("malformed claim text")]
    MalformedClaim,
}
