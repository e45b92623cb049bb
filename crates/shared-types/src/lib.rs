//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across Tezos-Gate
//! subsystems: wallet keys and addresses, the login challenge and its
//! signed-message claim, and the member access records.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Closed Curve Set**: `Curve` is a closed enum over the key types the
//!   gate accepts; per-curve behavior is dispatched on the tag, never by
//!   open-ended runtime inspection.
//! - **Derived Identity**: An `Address` is only ever computed from a public
//!   key; no constructor accepts a client-asserted address as authoritative.

pub mod challenge;
pub mod entities;
pub mod errors;
pub mod members;
pub mod time;

pub use challenge::{Challenge, ClaimPayload, PURPOSE_TAG, SIGNED_MESSAGE_PREFIX};
pub use entities::{Address, Curve, PublicKey, Signature};
pub use errors::TypeError;
pub use members::{Member, MemberForAdministrator, MemberStanding};
pub use time::current_timestamp;
