//! # Tezos-Gate Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # Wallet stand-ins and subsystem wiring
//! └── integration/      # Cross-subsystem choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tz-tests
//!
//! # By category
//! cargo test -p tz-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod support;
