//! Registry error taxonomy.
//!
//! Unlike the authentication surface, administrative operations report
//! failures directly: an administrator asking about a member that does not
//! exist learns exactly that.

use crate::ports::store::StoreError;
use shared_types::Address;
use thiserror::Error;

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No member is registered under the given address
    #[error("no member registered for {0}")]
    MemberNotFound(Address),

    /// No member is registered under the given public key
    #[error("no member registered for the given public key")]
    MemberKeyNotFound,

    /// The event store could not serve the operation
    #[error("member store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => RegistryError::StoreUnavailable(msg),
            StoreError::UnknownLog(address) => RegistryError::MemberNotFound(address),
        }
    }
}
