//! # Member Event Log
//!
//! The member aggregate is a fold over an append-only event log, one log per
//! address. Replaying the log from the start always reproduces the same
//! state, which is what makes the registry restartable.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Member, MemberForAdministrator, MemberStanding, PublicKey};

// =============================================================================
// Events
// =============================================================================

/// One entry in a member's event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberEvent {
    /// The wallet completed authentication for the first time. Creates the
    /// member and its access request in one step.
    WalletAuthenticated {
        /// Public key the wallet proved control of
        pub_key: PublicKey,
        /// Address derived from the public key
        address: Address,
        /// Unix timestamp (seconds) of the authentication
        at: u64,
    },
    /// An administrator granted the member full access.
    AccessGranted {
        /// Unix timestamp (seconds) of the grant
        at: u64,
    },
}

// =============================================================================
// Aggregate State
// =============================================================================

/// A member's state, folded from its event log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberState {
    /// The identity record established by the first authentication
    pub member: Member,
    /// Timestamp of the first authentication / access request
    pub requested_access_at: u64,
    /// Timestamp of the grant, if one happened
    pub granted_at: Option<u64>,
}

impl MemberState {
    /// Fold an event log into member state.
    ///
    /// Returns `None` for an empty log or a log that does not open with
    /// `WalletAuthenticated` (no such log is ever written, but replay stays
    /// total). Repeat `WalletAuthenticated` events leave the state
    /// untouched; the grant timestamp keeps the first grant.
    pub fn replay(events: &[MemberEvent]) -> Option<Self> {
        let mut state: Option<MemberState> = None;

        for event in events {
            match (&mut state, event) {
                (
                    None,
                    MemberEvent::WalletAuthenticated {
                        pub_key,
                        address,
                        at,
                    },
                ) => {
                    state = Some(MemberState {
                        member: Member {
                            pub_key: pub_key.clone(),
                            address: address.clone(),
                        },
                        requested_access_at: *at,
                        granted_at: None,
                    });
                }
                (Some(_), MemberEvent::WalletAuthenticated { .. }) => {}
                (Some(s), MemberEvent::AccessGranted { at }) => {
                    if s.granted_at.is_none() {
                        s.granted_at = Some(*at);
                    }
                }
                (None, MemberEvent::AccessGranted { .. }) => return None,
            }
        }

        state
    }

    /// Whether access has been granted.
    pub fn was_granted_access(&self) -> bool {
        self.granted_at.is_some()
    }

    /// The standing the authentication flow reports back to the wallet.
    pub fn standing(&self) -> MemberStanding {
        MemberStanding {
            member: self.member.clone(),
            requested_access_at: self.requested_access_at,
            was_granted_access: self.was_granted_access(),
        }
    }

    /// The row shape of the administrative listing.
    pub fn for_administrator(&self) -> MemberForAdministrator {
        MemberForAdministrator {
            address: self.member.address.clone(),
            requested_access_at: self.requested_access_at,
            was_granted_access: self.was_granted_access(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
