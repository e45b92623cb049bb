//! Crypto error types.

use shared_types::TypeError;
use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Envelope bytes do not follow the `0501` framing
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(&'static str),

    /// Base58Check decoding failed (bad alphabet or checksum)
    #[error("malformed base58check encoding")]
    MalformedEncoding,

    /// Key prefix is not one of the supported curve prefixes
    ///
    /// Surfaced loudly at submission parsing time: a wallet presenting an
    /// unknown key kind is a deployment/configuration problem, not an
    /// authentication outcome.
    #[error("unsupported public key prefix")]
    UnsupportedKeyPrefix,

    /// Signature prefix is not one of the supported signature prefixes
    #[error("unsupported signature prefix")]
    UnsupportedSignaturePrefix,

    /// Decoded key or signature bytes failed domain validation
    #[error(transparent)]
    InvalidMaterial(#[from] TypeError),
}
