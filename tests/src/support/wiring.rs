//! Cross-subsystem wiring.
//!
//! The authentication subsystem reaches the member registry only through
//! its outbound [`MemberDirectory`] port. [`RegistryDirectory`] is the
//! adapter a deployment would write: it forwards the post-verification
//! upsert to the TZ-02 registry service.

use async_trait::async_trait;
use shared_types::{Address, MemberStanding, PublicKey};
use std::sync::Arc;
use std::time::Duration;
use tz_01_wallet_auth::{
    ChallengeIssuer, DirectoryError, MemberDirectory, WalletAuthenticationService,
};
use tz_02_member_access::{InMemoryMemberEventStore, MemberAccessApi, MemberAccessService};

/// [`MemberDirectory`] adapter over the TZ-02 registry service.
pub struct RegistryDirectory {
    registry: Arc<MemberAccessService<InMemoryMemberEventStore>>,
}

impl RegistryDirectory {
    pub fn new(registry: Arc<MemberAccessService<InMemoryMemberEventStore>>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl MemberDirectory for RegistryDirectory {
    async fn record_authenticated_wallet(
        &self,
        pub_key: &PublicKey,
        address: &Address,
    ) -> Result<MemberStanding, DirectoryError> {
        self.registry
            .record_authenticated_wallet(pub_key, address)
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))
    }
}

/// A fully wired stack: authentication service in front, registry behind.
pub struct Stack {
    pub auth: WalletAuthenticationService<RegistryDirectory>,
    pub registry: Arc<MemberAccessService<InMemoryMemberEventStore>>,
}

/// Wire the two subsystems the way a deployment does.
pub fn stack() -> Stack {
    crate::support::telemetry::init();
    let registry = Arc::new(MemberAccessService::new(InMemoryMemberEventStore::new()));
    let auth = WalletAuthenticationService::new(RegistryDirectory::new(Arc::clone(&registry)));
    Stack { auth, registry }
}

/// Same wiring with a short challenge TTL for expiry scenarios.
pub fn stack_with_ttl(ttl: Duration) -> Stack {
    crate::support::telemetry::init();
    let registry = Arc::new(MemberAccessService::new(InMemoryMemberEventStore::new()));
    let auth = WalletAuthenticationService::with_issuer(
        ChallengeIssuer::with_ttl(ttl),
        RegistryDirectory::new(Arc::clone(&registry)),
    );
    Stack { auth, registry }
}
