//! # Shared Crypto - Wallet Authentication Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `envelope` | Micheline `0501` framing | Canonical signed-message bytes |
//! | `hashing` | BLAKE2b (160/256-bit) | Public key hash, signing digest |
//! | `address` | Base58Check | tz1/tz2/tz3 address derivation |
//! | `keys` | Base58Check | edpk/sppk/p2pk key decoding |
//! | `verify` | Ed25519 / secp256k1 / P-256 | Signature verification |
//!
//! ## Security Properties
//!
//! - **Ed25519**: complete addition formulas, constant-time verification
//! - **secp256k1 / P-256**: RustCrypto constant-time field arithmetic
//! - **Verification is total**: malformed keys or signatures verify `false`,
//!   they never panic or early-exit in a data-dependent way
//! - **Addresses are derived, never trusted**: `address::derive` is the only
//!   way to produce an `Address` from key material

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod envelope;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod verify;

// Re-exports
pub use address::derive;
pub use envelope::{decode, encode, encode_hex, ENVELOPE_PREFIX};
pub use errors::CryptoError;
pub use hashing::{blake2b_160, blake2b_256};
pub use keys::{parse_public_key, parse_signature};
pub use verify::verify;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
