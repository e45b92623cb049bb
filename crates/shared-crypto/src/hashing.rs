//! # BLAKE2b Hashing
//!
//! The two digest widths wallet authentication needs:
//!
//! - 160-bit for public key hashes (the payload of a tz address)
//! - 256-bit for the digest wallets actually sign over the envelope bytes

use blake2::digest::consts::{U20, U32};
use blake2::{Blake2b, Digest};

type Blake2b160 = Blake2b<U20>;
type Blake2b256 = Blake2b<U32>;

/// BLAKE2b-160 hash (public key hash width).
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&Blake2b160::digest(data));
    hash
}

/// BLAKE2b-256 hash (signing digest width).
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&Blake2b256::digest(data));
    hash
}
