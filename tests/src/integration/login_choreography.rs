//! # Login Choreography Tests
//!
//! The complete challenge/response flow across both subsystems:
//!
//! ```text
//! [Wallet] ──request_challenge──→ [TZ-01 Auth] ──hex envelope──→ [Wallet]
//! [Wallet] ──sign──→ [Wallet] ──submit_signature──→ [TZ-01 Auth]
//!                                       │ verify + consume nonce
//!                                       ↓
//!                              [TZ-02 Registry]
//!                              first-sight upsert
//! ```
//!
//! ## Test Categories
//!
//! 1. **Happy Path**: Full login per supported curve
//! 2. **Replay**: A spent challenge never authenticates twice
//! 3. **Impersonation**: Wrong wallet, wrong address, forged claims
//! 4. **Expiry**: TTL enforcement end to end

#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use shared_types::{Curve, Signature};

#[cfg(test)]
use tz_01_wallet_auth::{AuthenticationFailed, WalletAuthenticationApi};

#[cfg(test)]
use tz_02_member_access::MemberAccessApi;

#[cfg(test)]
use crate::support::{wiring, TestWallet};

#[cfg(test)]
const APP: &str = "Tezos Gate";

#[cfg(test)]
const CURVES: [Curve; 3] = [Curve::Ed25519, Curve::Secp256k1, Curve::P256];

#[tokio::test]
async fn test_full_login_every_curve() {
    for curve in CURVES {
        let stack = wiring::stack();
        let wallet = TestWallet::from_seed(curve, [0x42; 32]);

        let envelope_hex = stack.auth.request_challenge(APP, &wallet.address());
        let signature = wallet.sign_hex(&envelope_hex);

        let assertion = stack
            .auth
            .submit_signature(&envelope_hex, &signature, &wallet.public_key())
            .await
            .unwrap_or_else(|_| panic!("{curve} login should succeed"));

        assert_eq!(assertion.address, wallet.address());
        assert!(!assertion.was_granted_access);

        // The registry saw exactly this wallet.
        let standing = stack
            .registry
            .get_one_by_address(&wallet.address())
            .await
            .unwrap();
        assert_eq!(standing.member.pub_key, wallet.public_key());
    }
}

#[tokio::test]
async fn test_address_prefix_matches_curve() {
    let prefixes = [
        (Curve::Ed25519, "tz1"),
        (Curve::Secp256k1, "tz2"),
        (Curve::P256, "tz3"),
    ];

    for (curve, prefix) in prefixes {
        let wallet = TestWallet::from_seed(curve, [0x42; 32]);
        assert!(
            wallet.address().as_str().starts_with(prefix),
            "{curve} addresses start with {prefix}"
        );
    }
}

#[tokio::test]
async fn test_replayed_login_rejected() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);

    let envelope_hex = stack.auth.request_challenge(APP, &wallet.address());
    let signature = wallet.sign_hex(&envelope_hex);

    assert!(stack
        .auth
        .submit_signature(&envelope_hex, &signature, &wallet.public_key())
        .await
        .is_ok());
    assert_eq!(
        stack
            .auth
            .submit_signature(&envelope_hex, &signature, &wallet.public_key())
            .await,
        Err(AuthenticationFailed)
    );
}

#[tokio::test]
async fn test_impersonation_rejected() {
    let stack = wiring::stack();
    let victim = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);
    let attacker = TestWallet::from_seed(Curve::Ed25519, [0x66; 32]);

    // Attacker intercepts the victim's challenge and signs it with their
    // own key.
    let envelope_hex = stack.auth.request_challenge(APP, &victim.address());
    let signature = attacker.sign_hex(&envelope_hex);

    assert_eq!(
        stack
            .auth
            .submit_signature(&envelope_hex, &signature, &attacker.public_key())
            .await,
        Err(AuthenticationFailed)
    );

    // Nothing was registered for either party.
    assert!(stack
        .registry
        .get_one_by_address(&victim.address())
        .await
        .is_err());
    assert!(stack
        .registry
        .get_one_by_address(&attacker.address())
        .await
        .is_err());
}

#[tokio::test]
async fn test_signature_for_different_challenge_rejected() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Secp256k1, [0x42; 32]);

    let first_hex = stack.auth.request_challenge(APP, &wallet.address());
    let second_hex = stack.auth.request_challenge(APP, &wallet.address());

    // Signature over challenge 1 submitted with challenge 2's envelope.
    let signature = wallet.sign_hex(&first_hex);
    assert_eq!(
        stack
            .auth
            .submit_signature(&second_hex, &signature, &wallet.public_key())
            .await,
        Err(AuthenticationFailed)
    );
}

#[tokio::test]
async fn test_expired_challenge_rejected_end_to_end() {
    let stack = wiring::stack_with_ttl(Duration::from_millis(1));
    let wallet = TestWallet::from_seed(Curve::P256, [0x42; 32]);

    let envelope_hex = stack.auth.request_challenge(APP, &wallet.address());
    let signature = wallet.sign_hex(&envelope_hex);
    std::thread::sleep(Duration::from_millis(10));

    assert_eq!(
        stack
            .auth
            .submit_signature(&envelope_hex, &signature, &wallet.public_key())
            .await,
        Err(AuthenticationFailed)
    );
}

#[tokio::test]
async fn test_garbage_submission_rejected() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);
    let signature = Signature::from_bytes([0u8; 64]);

    assert_eq!(
        stack
            .auth
            .submit_signature("not even hex", &signature, &wallet.public_key())
            .await,
        Err(AuthenticationFailed)
    );
}

#[tokio::test]
async fn test_concurrent_double_submit_single_registration() {
    // Two tasks race the same signed challenge; at most one wins and the
    // registry holds one record.
    let stack = std::sync::Arc::new(wiring::stack());
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);

    let envelope_hex = stack.auth.request_challenge(APP, &wallet.address());
    let signature = wallet.sign_hex(&envelope_hex);
    let pub_key = wallet.public_key();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let stack = std::sync::Arc::clone(&stack);
            let envelope_hex = envelope_hex.clone();
            let pub_key = pub_key.clone();
            tokio::spawn(async move {
                stack
                    .auth
                    .submit_signature(&envelope_hex, &signature, &pub_key)
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(stack.registry.list_for_administration().await.unwrap().len(), 1);
}
