//! # Member Access Subsystem (TZ-02)
//!
//! Registry of wallet identities and their access requests for Tezos-Gate.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): The member aggregate as a fold over its
//!   event log, no I/O
//! - **Ports Layer** (`ports/`): Inbound registry API and outbound event
//!   store interface
//! - **Adapters Layer** (`adapters/`): In-memory event store
//! - **Service Layer** (`service.rs`): Registry operations over the store
//!
//! ## Lifecycle
//!
//! ```text
//! WalletAuthenticated -> (requested access) -> AccessGranted -> (member)
//! ```
//!
//! A wallet's first successful authentication creates the member and its
//! access request in one step. An administrator later grants access; the
//! grant is one-way and survives any number of further authentications.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryMemberEventStore;
pub use domain::errors::RegistryError;
pub use domain::events::{MemberEvent, MemberState};
pub use ports::api::MemberAccessApi;
pub use ports::store::{MemberEventStore, StoreError};
pub use service::MemberAccessService;
