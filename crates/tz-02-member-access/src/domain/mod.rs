//! Domain layer: the member aggregate and registry error taxonomy.

pub mod errors;
pub mod events;
