//! # Wire Key and Signature Decoding
//!
//! Wallets present public keys and signatures in Base58Check form
//! (`edpk...`, `sppk...`, `p2pk...` keys; `edsig...`, `spsig1...`,
//! `p2sig...`, or generic `sig...` signatures). This module decodes those
//! wire strings into the typed domain forms and re-encodes them.
//!
//! An unknown prefix is a configuration-level failure
//! ([`CryptoError::UnsupportedKeyPrefix`]), distinct from a signature that
//! merely fails to verify.

use crate::errors::CryptoError;
use shared_types::{Curve, PublicKey, Signature};

// Base58Check version prefixes (Tezos standard constants).
const EDPK_PREFIX: [u8; 4] = [13, 15, 37, 217];
const SPPK_PREFIX: [u8; 4] = [3, 254, 226, 86];
const P2PK_PREFIX: [u8; 4] = [3, 178, 139, 127];

const EDSIG_PREFIX: [u8; 5] = [9, 245, 205, 134, 18];
const SPSIG_PREFIX: [u8; 5] = [13, 115, 101, 19, 63];
const P2SIG_PREFIX: [u8; 4] = [54, 240, 44, 52];
const GENERIC_SIG_PREFIX: [u8; 3] = [4, 130, 43];

/// Decode a Base58Check public key string into a typed [`PublicKey`].
pub fn parse_public_key(encoded: &str) -> Result<PublicKey, CryptoError> {
    let raw = bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|_| CryptoError::MalformedEncoding)?;

    let (curve, key_bytes) = if let Some(rest) = raw.strip_prefix(&EDPK_PREFIX[..]) {
        (Curve::Ed25519, rest)
    } else if let Some(rest) = raw.strip_prefix(&SPPK_PREFIX[..]) {
        (Curve::Secp256k1, rest)
    } else if let Some(rest) = raw.strip_prefix(&P2PK_PREFIX[..]) {
        (Curve::P256, rest)
    } else {
        return Err(CryptoError::UnsupportedKeyPrefix);
    };

    Ok(PublicKey::new(curve, key_bytes.to_vec())?)
}

/// Re-encode a typed [`PublicKey`] into its Base58Check wire form.
pub fn encode_public_key(pub_key: &PublicKey) -> String {
    let prefix: &[u8] = match pub_key.curve() {
        Curve::Ed25519 => &EDPK_PREFIX,
        Curve::Secp256k1 => &SPPK_PREFIX,
        Curve::P256 => &P2PK_PREFIX,
    };

    let mut payload = Vec::with_capacity(prefix.len() + pub_key.as_bytes().len());
    payload.extend_from_slice(prefix);
    payload.extend_from_slice(pub_key.as_bytes());
    bs58::encode(payload).with_check().into_string()
}

/// Decode a Base58Check signature string into raw signature bytes.
///
/// Accepts the curve-specific forms and the generic `sig` form; the curve
/// binding comes from the public key the signature is paired with, so the
/// decoded value is curve-agnostic.
pub fn parse_signature(encoded: &str) -> Result<Signature, CryptoError> {
    let raw = bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|_| CryptoError::MalformedEncoding)?;

    let sig_bytes = if let Some(rest) = raw.strip_prefix(&EDSIG_PREFIX[..]) {
        rest
    } else if let Some(rest) = raw.strip_prefix(&SPSIG_PREFIX[..]) {
        rest
    } else if let Some(rest) = raw.strip_prefix(&P2SIG_PREFIX[..]) {
        rest
    } else if let Some(rest) = raw.strip_prefix(&GENERIC_SIG_PREFIX[..]) {
        rest
    } else {
        return Err(CryptoError::UnsupportedSignaturePrefix);
    };

    Ok(Signature::from_slice(sig_bytes)?)
}

/// Encode raw signature bytes into the generic `sig...` wire form.
pub fn encode_signature(signature: &Signature) -> String {
    let mut payload = Vec::with_capacity(GENERIC_SIG_PREFIX.len() + 64);
    payload.extend_from_slice(&GENERIC_SIG_PREFIX);
    payload.extend_from_slice(signature.as_bytes());
    bs58::encode(payload).with_check().into_string()
}

// =============================================================================
// TESTS
// =============================================================================
