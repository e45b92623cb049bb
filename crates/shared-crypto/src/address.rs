//! # Address Derivation
//!
//! One-way derivation of a wallet address from a public key: BLAKE2b-160
//! over the raw key bytes, then Base58Check with a curve-specific version
//! prefix (`tz1` / `tz2` / `tz3`).
//!
//! This module is the single source of truth for address computation. The
//! server recomputes the address from the asserted public key on every
//! authentication attempt and never trusts a client-supplied address.

use crate::hashing::blake2b_160;
use shared_types::{Address, Curve, PublicKey};

/// Version prefix for Ed25519 public key hashes (`tz1...`).
const TZ1_PREFIX: [u8; 3] = [6, 161, 159];
/// Version prefix for secp256k1 public key hashes (`tz2...`).
const TZ2_PREFIX: [u8; 3] = [6, 161, 161];
/// Version prefix for P-256 public key hashes (`tz3...`).
const TZ3_PREFIX: [u8; 3] = [6, 161, 164];

fn version_prefix(curve: Curve) -> [u8; 3] {
    match curve {
        Curve::Ed25519 => TZ1_PREFIX,
        Curve::Secp256k1 => TZ2_PREFIX,
        Curve::P256 => TZ3_PREFIX,
    }
}

/// Derive the wallet address for a public key.
///
/// Pure and deterministic. Distinct keys yield distinct addresses up to
/// BLAKE2b collision resistance.
pub fn derive(pub_key: &PublicKey) -> Address {
    let hash = blake2b_160(pub_key.as_bytes());

    let mut payload = Vec::with_capacity(3 + hash.len());
    payload.extend_from_slice(&version_prefix(pub_key.curve()));
    payload.extend_from_slice(&hash);

    // Base58Check: the `check` codec appends the first four bytes of
    // SHA-256(SHA-256(payload)) before encoding.
    Address::new(bs58::encode(payload).with_check().into_string())
}

// =============================================================================
// TESTS
// =============================================================================
