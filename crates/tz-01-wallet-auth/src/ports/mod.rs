//! Ports layer: inbound (driving) and outbound (driven) interfaces.

pub mod inbound;
pub mod outbound;
