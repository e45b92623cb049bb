//! In-process stand-ins for the external wallet signer.
//!
//! A real deployment never holds private keys; the suite needs them to play
//! both sides of the challenge/response protocol. Signing mirrors wallet
//! behavior exactly: the signature covers the BLAKE2b-256 digest of the
//! envelope bytes.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use shared_crypto::blake2b_256;
use shared_types::{Address, Curve, PublicKey, Signature};

/// A wallet the suite controls, one per supported curve.
pub enum TestWallet {
    Ed25519(ed25519_dalek::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
    P256(p256::ecdsa::SigningKey),
}

impl TestWallet {
    /// Deterministic wallet from a 32-byte seed.
    pub fn from_seed(curve: Curve, seed: [u8; 32]) -> Self {
        match curve {
            Curve::Ed25519 => TestWallet::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed)),
            Curve::Secp256k1 => TestWallet::Secp256k1(
                k256::ecdsa::SigningKey::from_slice(&seed).expect("seed is a valid scalar"),
            ),
            Curve::P256 => TestWallet::P256(
                p256::ecdsa::SigningKey::from_slice(&seed).expect("seed is a valid scalar"),
            ),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            TestWallet::Ed25519(sk) => {
                PublicKey::new(Curve::Ed25519, sk.verifying_key().to_bytes().to_vec())
                    .expect("dalek emits 32-byte keys")
            }
            TestWallet::Secp256k1(sk) => PublicKey::new(
                Curve::Secp256k1,
                sk.verifying_key().to_encoded_point(true).as_bytes().to_vec(),
            )
            .expect("compressed SEC1 point is 33 bytes"),
            TestWallet::P256(sk) => PublicKey::new(
                Curve::P256,
                sk.verifying_key().to_encoded_point(true).as_bytes().to_vec(),
            )
            .expect("compressed SEC1 point is 33 bytes"),
        }
    }

    /// The address this wallet reports as active.
    pub fn address(&self) -> Address {
        shared_crypto::derive(&self.public_key())
    }

    /// Sign a hex envelope the way the wallet's sign request does.
    pub fn sign_hex(&self, envelope_hex: &str) -> Signature {
        let envelope = hex::decode(envelope_hex).expect("service emits valid hex");
        let digest = blake2b_256(&envelope);

        match self {
            TestWallet::Ed25519(sk) => {
                use ed25519_dalek::Signer;
                Signature::from_bytes(sk.sign(&digest).to_bytes())
            }
            TestWallet::Secp256k1(sk) => {
                let sig: k256::ecdsa::Signature =
                    sk.sign_prehash(&digest).expect("signing never fails");
                Signature::from_slice(sig.to_bytes().as_slice()).expect("r||s is 64 bytes")
            }
            TestWallet::P256(sk) => {
                let sig: p256::ecdsa::Signature =
                    sk.sign_prehash(&digest).expect("signing never fails");
                Signature::from_slice(sig.to_bytes().as_slice()).expect("r||s is 64 bytes")
            }
        }
    }
}
