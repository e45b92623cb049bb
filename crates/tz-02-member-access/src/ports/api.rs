//! # Inbound Port (Registry API)
//!
//! The operations the rest of the system drives the registry through: the
//! authentication subsystem records wallets, the administrative surface
//! reads and grants.

use crate::domain::errors::RegistryError;
use async_trait::async_trait;
use shared_types::{Address, MemberForAdministrator, MemberStanding, PublicKey};

/// Primary member access registry API.
#[async_trait]
pub trait MemberAccessApi: Send + Sync {
    /// Idempotent first-sight upsert of an authenticated wallet.
    ///
    /// The first call for an address creates the member and its access
    /// request; under concurrent first sight exactly one record is created.
    /// Repeat calls never reset the grant flag or the request timestamp.
    async fn record_authenticated_wallet(
        &self,
        pub_key: &PublicKey,
        address: &Address,
    ) -> Result<MemberStanding, RegistryError>;

    /// Grant a member full access. One-way: granting twice is a no-op.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MemberNotFound`] if no member exists under the
    /// address.
    async fn grant_access(&self, address: &Address) -> Result<(), RegistryError>;

    /// Look up a member by address.
    async fn get_one_by_address(&self, address: &Address)
        -> Result<MemberStanding, RegistryError>;

    /// Look up a member by the public key it authenticated with.
    async fn get_one_by_pub_key(
        &self,
        pub_key: &PublicKey,
    ) -> Result<MemberStanding, RegistryError>;

    /// All members, ordered for the administrative listing: granted members
    /// first, then by request time ascending, address as final tiebreak.
    async fn list_for_administration(
        &self,
    ) -> Result<Vec<MemberForAdministrator>, RegistryError>;
}
