//! Ports layer: inbound registry API and outbound event store interface.

pub mod api;
pub mod store;
