//! # Outbound Ports (Driven Ports)
//!
//! What this subsystem requires from the member access registry. The
//! registry itself lives in its own subsystem; authentication only needs
//! the post-verification upsert.

use async_trait::async_trait;
use shared_types::{Address, MemberStanding, PublicKey};
use thiserror::Error;

/// Errors the member directory can report back to the protocol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The directory could not record or read the member
    #[error("member directory unavailable: {0}")]
    Unavailable(String),
}

/// Gateway to the member access registry.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Idempotent first-sight upsert of an authenticated wallet.
    ///
    /// Creates the member and its access request on first sight; repeat
    /// calls must leave the grant flag and request timestamp untouched.
    /// Returns the member's current standing either way.
    async fn record_authenticated_wallet(
        &self,
        pub_key: &PublicKey,
        address: &Address,
    ) -> Result<MemberStanding, DirectoryError>;
}
