//! # Member Records
//!
//! A member is a wallet identity known to the system, independent of whether
//! an administrator has approved it for full access.

use crate::entities::{Address, PublicKey};
use serde::{Deserialize, Serialize};

/// Canonical identity record for an authenticated wallet.
///
/// Keyed by address; the address is always derived from `pub_key`, never
/// client-asserted, so the two fields are 1:1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Public key the wallet authenticated with
    pub pub_key: PublicKey,
    /// Address derived from `pub_key`
    pub address: Address,
}

/// A member's current access standing, as the authentication flow sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStanding {
    /// The identity record
    pub member: Member,
    /// Unix timestamp (seconds) of the first authentication / access request
    pub requested_access_at: u64,
    /// Whether an administrator has granted access
    pub was_granted_access: bool,
}

/// Row shape for the administrative member listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberForAdministrator {
    /// Wallet address
    pub address: Address,
    /// Unix timestamp (seconds) of the access request
    pub requested_access_at: u64,
    /// Whether access has been granted
    pub was_granted_access: bool,
}
