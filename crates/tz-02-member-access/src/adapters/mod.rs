//! Adapters layer: event store implementations.

pub mod memory;

pub use memory::InMemoryMemberEventStore;
