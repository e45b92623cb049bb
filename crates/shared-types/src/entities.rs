//! # Wallet Entities
//!
//! Key material, signatures, and derived wallet addresses.

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

// =============================================================================
// Curves
// =============================================================================

/// Signature curve of a wallet key.
///
/// The three curves Tezos wallets sign with. This is a closed set: adding a
/// curve means adding a variant here plus a verification routine and an
/// address prefix, all dispatched on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    /// Twisted Edwards (tz1 addresses, `edpk` keys)
    Ed25519,
    /// secp256k1 ECDSA (tz2 addresses, `sppk` keys)
    Secp256k1,
    /// NIST P-256 ECDSA (tz3 addresses, `p2pk` keys)
    P256,
}

impl Curve {
    /// Expected raw public key length in bytes.
    ///
    /// Ed25519 keys are 32-byte points; the ECDSA curves use 33-byte
    /// compressed SEC1 encoding.
    pub fn key_length(&self) -> usize {
        match self {
            Curve::Ed25519 => 32,
            Curve::Secp256k1 => 33,
            Curve::P256 => 33,
        }
    }

    /// Human-readable curve name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Ed25519 => "ed25519",
            Curve::Secp256k1 => "secp256k1",
            Curve::P256 => "p256",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Public Keys
// =============================================================================

/// A wallet public key: raw point bytes tagged with their curve.
///
/// Immutable once constructed; `new` rejects byte lengths that do not match
/// the curve, so every live `PublicKey` satisfies the length invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    curve: Curve,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Construct a public key, validating the byte length for the curve.
    pub fn new(curve: Curve, bytes: Vec<u8>) -> Result<Self, TypeError> {
        if bytes.len() != curve.key_length() {
            return Err(TypeError::InvalidKeyLength {
                curve: curve.name(),
                expected: curve.key_length(),
                actual: bytes.len(),
            });
        }
        Ok(Self { curve, bytes })
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// =============================================================================
// Signatures
// =============================================================================

/// Length of a raw wallet signature in bytes.
///
/// Both Ed25519 signatures and ECDSA `r || s` encodings are 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// An opaque signature produced by the external wallet signer.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde_as(as = "Bytes")] [u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Construct from a fixed-size byte array.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Construct from a slice, validating the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let array: [u8; SIGNATURE_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| TypeError::InvalidSignatureLength {
                    expected: SIGNATURE_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }
}

// =============================================================================
// Addresses
// =============================================================================

/// A Base58Check-encoded wallet address (public key hash).
///
/// Always derived from a `PublicKey` by the address module in
/// `shared-crypto`; this type only carries the encoded form around.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Wrap an already-encoded address string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
