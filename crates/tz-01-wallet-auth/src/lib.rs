//! # Wallet Authentication Subsystem (TZ-01)
//!
//! Challenge/response proof of wallet key control for Tezos-Gate.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Challenge lifecycle and rejection taxonomy,
//!   no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound
//!   interfaces
//! - **Service Layer** (`service.rs`): The protocol state machine wiring
//!   domain logic to ports
//!
//! ## Protocol
//!
//! ```text
//! ChallengeIssued -> AwaitingSubmission -> Verifying -> {Authenticated | Rejected}
//! ```
//!
//! 1. The caller requests a challenge for the address its wallet reports as
//!    active; the service returns the hex envelope the external signer will
//!    sign.
//! 2. The caller later submits `(envelope_hex, signature, pub_key)`; the
//!    service re-derives the address, re-derives the envelope, consumes the
//!    nonce exactly once, and verifies the signature.
//!
//! ## Security Notes
//!
//! - **One generic failure**: every rejected submission surfaces as the
//!   opaque [`AuthenticationFailed`]; the specific reason is kept in
//!   server-side diagnostics so callers get no oracle distinguishing a bad
//!   signature from an expired challenge.
//! - **Nonce entropy**: challenge nonces carry 128 bits from the OS CSPRNG.
//! - **No signer handle**: the external wallet is a black box; this
//!   subsystem only ever sees the two request/response payloads.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::challenge::{ChallengeIssuer, ConsumeOutcome, CHALLENGE_TTL};
pub use domain::entities::AccessAssertion;
pub use domain::errors::{AuthenticationFailed, RejectionReason};
pub use ports::inbound::WalletAuthenticationApi;
pub use ports::outbound::{DirectoryError, MemberDirectory};
pub use service::WalletAuthenticationService;
