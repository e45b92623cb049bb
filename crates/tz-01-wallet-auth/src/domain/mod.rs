//! Domain layer: challenge lifecycle, rejection taxonomy, assertion types.

pub mod challenge;
pub mod entities;
pub mod errors;
