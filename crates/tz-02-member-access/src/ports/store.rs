//! # Outbound Port (Event Store)
//!
//! Append-only storage of per-address member event logs. The store knows
//! nothing about member semantics; it only guarantees log atomicity.

use crate::domain::events::MemberEvent;
use async_trait::async_trait;
use shared_types::Address;
use thiserror::Error;

/// Errors the event store can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not serve the operation
    #[error("event store unavailable: {0}")]
    Unavailable(String),

    /// Append targeted a log that was never opened
    #[error("no event log for {0}")]
    UnknownLog(Address),
}

/// Append-only member event storage, one log per address.
#[async_trait]
pub trait MemberEventStore: Send + Sync {
    /// Open a log with its first event, atomically.
    ///
    /// Returns `true` if the log was created, `false` if one already existed
    /// (the event is then discarded). Exactly one of N concurrent callers
    /// for the same address observes `true`.
    async fn record_first_sight(
        &self,
        address: &Address,
        event: MemberEvent,
    ) -> Result<bool, StoreError>;

    /// Append an event to an existing log.
    ///
    /// Appending to a log that was never opened is a caller bug; the store
    /// refuses rather than creating an orphan log.
    async fn append(&self, address: &Address, event: MemberEvent) -> Result<(), StoreError>;

    /// Load one log, oldest event first. Empty if the log was never opened.
    async fn load(&self, address: &Address) -> Result<Vec<MemberEvent>, StoreError>;

    /// Load every log. Order of logs is unspecified.
    async fn load_all(&self) -> Result<Vec<(Address, Vec<MemberEvent>)>, StoreError>;
}
