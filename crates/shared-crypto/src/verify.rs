//! # Signature Verification
//!
//! Verifies a wallet signature over the exact envelope bytes, dispatched on
//! the public key's curve tag. Wallets sign the BLAKE2b-256 digest of the
//! envelope, so verification runs over that digest.
//!
//! Verification is a **total function**: malformed key material or signature
//! bytes yield `false`, they never propagate an error. Distinguishing "bad
//! signature" from "bad key bytes" would only hand an attacker an oracle.
//! Constant-time behavior is inherited from the underlying RustCrypto
//! implementations.

use crate::hashing::blake2b_256;
use ed25519_dalek::Verifier;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use shared_types::{Curve, PublicKey, Signature};

/// Verify `signature` over `envelope` against `pub_key`.
///
/// Returns `true` only if the signature validates over the BLAKE2b-256
/// digest of the exact envelope bytes under the given key.
pub fn verify(envelope: &[u8], signature: &Signature, pub_key: &PublicKey) -> bool {
    let digest = blake2b_256(envelope);

    match pub_key.curve() {
        Curve::Ed25519 => verify_ed25519(&digest, signature, pub_key.as_bytes()),
        Curve::Secp256k1 => verify_secp256k1(&digest, signature, pub_key.as_bytes()),
        Curve::P256 => verify_p256(&digest, signature, pub_key.as_bytes()),
    }
}

fn verify_ed25519(digest: &[u8; 32], signature: &Signature, key_bytes: &[u8]) -> bool {
    let key_array: [u8; 32] = match key_bytes.try_into() {
        Ok(arr) => arr,
        Err(_) => return false,
    };
    let verifying_key = match ed25519_dalek::VerifyingKey::from_bytes(&key_array) {
        Ok(vk) => vk,
        Err(_) => return false,
    };

    // Tezos Ed25519 signs the 32-byte digest as the message.
    let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
    verifying_key.verify(digest, &sig).is_ok()
}

fn verify_secp256k1(digest: &[u8; 32], signature: &Signature, key_bytes: &[u8]) -> bool {
    let verifying_key = match k256::ecdsa::VerifyingKey::from_sec1_bytes(key_bytes) {
        Ok(vk) => vk,
        Err(_) => return false,
    };
    let sig = match k256::ecdsa::Signature::from_slice(signature.as_bytes()) {
        Ok(s) => s,
        Err(_) => return false,
    };

    verifying_key.verify_prehash(digest, &sig).is_ok()
}

fn verify_p256(digest: &[u8; 32], signature: &Signature, key_bytes: &[u8]) -> bool {
    let verifying_key = match p256::ecdsa::VerifyingKey::from_sec1_bytes(key_bytes) {
        Ok(vk) => vk,
        Err(_) => return false,
    };
    let sig = match p256::ecdsa::Signature::from_slice(signature.as_bytes()) {
        Ok(s) => s,
        Err(_) => return false,
    };

    verifying_key.verify_prehash(digest, &sig).is_ok()
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// TESTS
// =============================================================================
