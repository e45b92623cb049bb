//! # Access Lifecycle Tests
//!
//! The member's journey after a first login: pending access request,
//! administrative grant, and what a returning wallet sees.
//!
//! ## Test Categories
//!
//! 1. **Request**: First login creates a pending access request
//! 2. **Grant**: Administrators flip the flag exactly once
//! 3. **Return visits**: Standing survives re-authentication
//! 4. **Listing**: Administrative ordering across many members

#[cfg(test)]
use shared_types::Curve;

#[cfg(test)]
use tz_01_wallet_auth::WalletAuthenticationApi;

#[cfg(test)]
use tz_02_member_access::{MemberAccessApi, RegistryError};

#[cfg(test)]
use crate::support::{wiring, TestWallet};

#[cfg(test)]
const APP: &str = "Tezos Gate";

/// Run one full login for the wallet against the stack.
#[cfg(test)]
async fn login(stack: &wiring::Stack, wallet: &TestWallet) -> bool {
    let envelope_hex = stack.auth.request_challenge(APP, &wallet.address());
    let signature = wallet.sign_hex(&envelope_hex);
    stack
        .auth
        .submit_signature(&envelope_hex, &signature, &wallet.public_key())
        .await
        .map(|assertion| assertion.was_granted_access)
        .unwrap_or_else(|_| panic!("login should succeed"))
}

#[tokio::test]
async fn test_first_login_leaves_request_pending() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);

    assert!(!login(&stack, &wallet).await);

    let rows = stack.registry.list_for_administration().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].address, wallet.address());
    assert!(!rows[0].was_granted_access);
}

#[tokio::test]
async fn test_grant_visible_on_next_login() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);

    assert!(!login(&stack, &wallet).await);
    stack.registry.grant_access(&wallet.address()).await.unwrap();

    // The returning wallet is told it now has access; the request
    // timestamp is unchanged.
    let before = stack
        .registry
        .get_one_by_address(&wallet.address())
        .await
        .unwrap();
    assert!(login(&stack, &wallet).await);
    let after = stack
        .registry
        .get_one_by_address(&wallet.address())
        .await
        .unwrap();

    assert_eq!(before.requested_access_at, after.requested_access_at);
    assert!(after.was_granted_access);
}

#[tokio::test]
async fn test_grant_for_unknown_wallet_is_not_found() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Ed25519, [0x42; 32]);

    assert_eq!(
        stack.registry.grant_access(&wallet.address()).await,
        Err(RegistryError::MemberNotFound(wallet.address()))
    );
}

#[tokio::test]
async fn test_lookup_by_pub_key_after_login() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::Secp256k1, [0x42; 32]);

    login(&stack, &wallet).await;

    let standing = stack
        .registry
        .get_one_by_pub_key(&wallet.public_key())
        .await
        .unwrap();
    assert_eq!(standing.member.address, wallet.address());
}

#[tokio::test]
async fn test_listing_orders_granted_members_first() {
    let stack = wiring::stack();
    let wallets: Vec<TestWallet> = [[0x11; 32], [0x22; 32], [0x33; 32], [0x44; 32]]
        .into_iter()
        .map(|seed| TestWallet::from_seed(Curve::Ed25519, seed))
        .collect();

    for wallet in &wallets {
        login(&stack, wallet).await;
    }
    stack
        .registry
        .grant_access(&wallets[2].address())
        .await
        .unwrap();

    let rows = stack.registry.list_for_administration().await.unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].address, wallets[2].address());
    assert!(rows[0].was_granted_access);
    assert!(rows[1..].iter().all(|row| !row.was_granted_access));
}

#[tokio::test]
async fn test_one_member_per_wallet_across_logins() {
    let stack = wiring::stack();
    let wallet = TestWallet::from_seed(Curve::P256, [0x42; 32]);

    for _ in 0..3 {
        login(&stack, &wallet).await;
    }

    assert_eq!(stack.registry.list_for_administration().await.unwrap().len(), 1);
}
