//! # Challenge Issuer
//!
//! Issues login challenges and enforces their validity window. The pending
//! store is the only shared mutable state in this subsystem.
//!
//! ## Design
//!
//! - Nonces are 128 bits from the OS CSPRNG, hex-encoded.
//! - `consume` is one critical section: lookup, address binding check, TTL
//!   check, and removal happen under a single write lock, so concurrent
//!   consumption attempts on the same nonce yield exactly one success.
//! - The store is bounded: when it reaches capacity, expired entries are
//!   evicted before inserting, so its size tracks TTL x login rate.

use rand::rngs::OsRng;
use rand::RngCore;
use shared_types::{current_timestamp, Address, Challenge};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Validity window of an issued challenge.
pub const CHALLENGE_TTL: Duration = Duration::from_secs(300);

/// Nonce entropy in bytes (128 bits).
pub const NONCE_LENGTH: usize = 16;

/// Maximum pending challenges before forced eviction of expired entries.
pub const MAX_PENDING_CHALLENGES: usize = 100_000;

/// Outcome of a challenge consumption attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// The challenge existed, was in its validity window, and is now spent
    Consumed,
    /// The challenge existed but its TTL had elapsed
    Expired,
    /// The nonce is unknown, already spent, or bound to a different address
    AlreadyConsumed,
}

/// A challenge awaiting its signature submission.
#[derive(Debug)]
struct PendingChallenge {
    claimed_address: Address,
    issued_at: Instant,
}

/// Issues challenges and tracks their single-use consumption.
#[derive(Debug)]
pub struct ChallengeIssuer {
    pending: RwLock<HashMap<String, PendingChallenge>>,
    ttl: Duration,
}

impl ChallengeIssuer {
    /// Create an issuer with the default TTL.
    pub fn new() -> Self {
        Self::with_ttl(CHALLENGE_TTL)
    }

    /// Create an issuer with an explicit TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            pending: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh challenge for one login attempt.
    ///
    /// Records `(nonce -> claimed_address, issued_at)` in the pending store.
    pub fn issue(&self, application_name: &str, claimed_address: &Address) -> Challenge {
        let nonce = generate_nonce();
        let now = Instant::now();

        let mut pending = match self.pending.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Lazy eviction keeps the store bounded without a background sweep.
        if pending.len() >= MAX_PENDING_CHALLENGES {
            let ttl = self.ttl;
            pending.retain(|_, entry| now.duration_since(entry.issued_at) <= ttl);
        }

        pending.insert(
            nonce.clone(),
            PendingChallenge {
                claimed_address: claimed_address.clone(),
                issued_at: now,
            },
        );
        drop(pending);

        Challenge {
            nonce,
            claimed_address: claimed_address.clone(),
            issued_at: current_timestamp(),
            application_name: application_name.to_string(),
        }
    }

    /// Atomically consume a challenge.
    ///
    /// Exactly one of N concurrent attempts on the same nonce observes
    /// [`ConsumeOutcome::Consumed`]; the rest observe `AlreadyConsumed`.
    /// A nonce bound to a different address reports `AlreadyConsumed`
    /// without burning the real holder's challenge.
    pub fn consume(&self, nonce: &str, claimed_address: &Address) -> ConsumeOutcome {
        let mut pending = match self.pending.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let entry = match pending.get(nonce) {
            Some(entry) => entry,
            None => return ConsumeOutcome::AlreadyConsumed,
        };

        if entry.claimed_address != *claimed_address {
            return ConsumeOutcome::AlreadyConsumed;
        }

        let expired = entry.issued_at.elapsed() > self.ttl;
        pending.remove(nonce);

        if expired {
            ConsumeOutcome::Expired
        } else {
            ConsumeOutcome::Consumed
        }
    }

    /// Number of challenges currently pending. Primarily for tests.
    pub fn pending_count(&self) -> usize {
        self.pending.read().map(|p| p.len()).unwrap_or(0)
    }
}

impl Default for ChallengeIssuer {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

// =============================================================================
// TESTS
// =============================================================================
