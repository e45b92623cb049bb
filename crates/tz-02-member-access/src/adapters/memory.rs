//! # In-Memory Event Store
//!
//! `HashMap` of per-address event logs behind one `RwLock`. First-sight
//! atomicity falls out of the write lock: the existence check and the log
//! creation are one critical section.

use crate::domain::events::MemberEvent;
use crate::ports::store::{MemberEventStore, StoreError};
use async_trait::async_trait;
use shared_types::Address;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory [`MemberEventStore`].
#[derive(Debug, Default)]
pub struct InMemoryMemberEventStore {
    logs: RwLock<HashMap<Address, Vec<MemberEvent>>>,
}

impl InMemoryMemberEventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn write_logs(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Address, Vec<MemberEvent>>> {
        match self.logs.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn read_logs(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Address, Vec<MemberEvent>>> {
        match self.logs.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl MemberEventStore for InMemoryMemberEventStore {
    async fn record_first_sight(
        &self,
        address: &Address,
        event: MemberEvent,
    ) -> Result<bool, StoreError> {
        let mut logs = self.write_logs();
        match logs.entry(address.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(vec![event]);
                Ok(true)
            }
        }
    }

    async fn append(&self, address: &Address, event: MemberEvent) -> Result<(), StoreError> {
        let mut logs = self.write_logs();
        match logs.get_mut(address) {
            Some(log) => {
                log.push(event);
                Ok(())
            }
            None => Err(StoreError::UnknownLog(address.clone())),
        }
    }

    async fn load(&self, address: &Address) -> Result<Vec<MemberEvent>, StoreError> {
        Ok(self.read_logs().get(address).cloned().unwrap_or_default())
    }

    async fn load_all(&self) -> Result<Vec<(Address, Vec<MemberEvent>)>, StoreError> {
        Ok(self
            .read_logs()
            .iter()
            .map(|(address, log)| (address.clone(), log.clone()))
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
