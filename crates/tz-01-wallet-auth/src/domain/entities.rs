//! Domain entities for the authentication protocol.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// What a successful authentication asserts to the external caller.
///
/// The session/cookie issuer downstream decides what a `false` grant means
/// (typically an authenticated-but-pending-approval experience).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessAssertion {
    /// Address derived from the submitted public key
    pub address: Address,
    /// Whether an administrator has granted this wallet access
    pub was_granted_access: bool,
}
