//! # Member Access Service
//!
//! Registry operations over the event store: first-sight upsert driven by
//! the authentication flow, grants and listings driven by administrators.
//!
//! State is never stored directly; every read replays the relevant logs, so
//! a restart over the same store reproduces identical answers.

use crate::domain::errors::RegistryError;
use crate::domain::events::{MemberEvent, MemberState};
use crate::ports::api::MemberAccessApi;
use crate::ports::store::MemberEventStore;
use async_trait::async_trait;
use shared_types::{
    current_timestamp, Address, MemberForAdministrator, MemberStanding, PublicKey,
};

/// Member access registry service.
pub struct MemberAccessService<S: MemberEventStore> {
    store: S,
}

impl<S: MemberEventStore> MemberAccessService<S> {
    /// Create a registry over the given event store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replay one member's log, mapping an absent or empty log to
    /// [`RegistryError::MemberNotFound`].
    async fn state_of(&self, address: &Address) -> Result<MemberState, RegistryError> {
        let log = self.store.load(address).await?;
        MemberState::replay(&log).ok_or_else(|| RegistryError::MemberNotFound(address.clone()))
    }

    /// Replay every log into member states, skipping logs that fold to
    /// nothing.
    async fn all_states(&self) -> Result<Vec<MemberState>, RegistryError> {
        let logs = self.store.load_all().await?;
        Ok(logs
            .iter()
            .filter_map(|(_, log)| MemberState::replay(log))
            .collect())
    }
}

#[async_trait]
impl<S: MemberEventStore> MemberAccessApi for MemberAccessService<S> {
    async fn record_authenticated_wallet(
        &self,
        pub_key: &PublicKey,
        address: &Address,
    ) -> Result<MemberStanding, RegistryError> {
        let event = MemberEvent::WalletAuthenticated {
            pub_key: pub_key.clone(),
            address: address.clone(),
            at: current_timestamp(),
        };

        let created = self.store.record_first_sight(address, event).await?;
        if created {
            tracing::info!(%address, "registered new member access request");
        }

        // Read back through the log either way: a repeat sighting reports
        // the member's existing standing, grant flag included.
        Ok(self.state_of(address).await?.standing())
    }

    async fn grant_access(&self, address: &Address) -> Result<(), RegistryError> {
        let state = self.state_of(address).await?;
        if state.was_granted_access() {
            return Ok(());
        }

        self.store
            .append(
                address,
                MemberEvent::AccessGranted {
                    at: current_timestamp(),
                },
            )
            .await?;

        tracing::info!(%address, "granted member access");
        Ok(())
    }

    async fn get_one_by_address(
        &self,
        address: &Address,
    ) -> Result<MemberStanding, RegistryError> {
        Ok(self.state_of(address).await?.standing())
    }

    async fn get_one_by_pub_key(
        &self,
        pub_key: &PublicKey,
    ) -> Result<MemberStanding, RegistryError> {
        let states = self.all_states().await?;
        states
            .into_iter()
            .find(|state| state.member.pub_key == *pub_key)
            .map(|state| state.standing())
            .ok_or(RegistryError::MemberKeyNotFound)
    }

    async fn list_for_administration(
        &self,
    ) -> Result<Vec<MemberForAdministrator>, RegistryError> {
        let mut rows: Vec<MemberForAdministrator> = self
            .all_states()
            .await?
            .iter()
            .map(MemberState::for_administrator)
            .collect();

        // Granted members first, then oldest request first; the address
        // tiebreak keeps the listing identical across restarts.
        rows.sort_by(|a, b| {
            b.was_granted_access
                .cmp(&a.was_granted_access)
                .then(a.requested_access_at.cmp(&b.requested_access_at))
                .then(a.address.cmp(&b.address))
        });

        Ok(rows)
    }
}

// =============================================================================
// TESTS
// =============================================================================
