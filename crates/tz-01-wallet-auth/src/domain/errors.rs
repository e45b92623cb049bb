//! Authentication failure types.
//!
//! The split matters: [`RejectionReason`] is the internal taxonomy recorded
//! in diagnostics, [`AuthenticationFailed`] is the single opaque signal a
//! caller ever sees.

use thiserror::Error;

/// Internal reasons a submission is rejected. Never surfaced to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RejectionReason {
    /// Envelope hex or framing could not be decoded
    #[error("malformed envelope")]
    MalformedEnvelope,

    /// Claim text inside the envelope is not a valid login claim
    #[error("malformed claim")]
    MalformedClaim,

    /// Submitted envelope bytes differ from the canonical re-derivation
    #[error("envelope does not match canonical encoding")]
    EnvelopeMismatch,

    /// Address derived from the public key differs from the claimed address
    #[error("address mismatch")]
    AddressMismatch,

    /// Challenge was issued longer ago than the TTL allows
    #[error("challenge expired")]
    ChallengeExpired,

    /// Nonce is unknown or was already consumed
    #[error("challenge replayed")]
    ChallengeReplayed,

    /// Signature does not validate over the envelope bytes
    #[error("invalid signature")]
    InvalidSignature,

    /// The member directory could not record the authenticated wallet
    #[error("member directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

/// The one failure callers see, regardless of internal reason.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("authentication failed")]
pub struct AuthenticationFailed;
