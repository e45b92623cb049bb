//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem. The web layer
//! (login form handling, session issuance) drives the protocol through
//! this trait and nothing else.

use crate::domain::entities::AccessAssertion;
use crate::domain::errors::AuthenticationFailed;
use async_trait::async_trait;
use shared_types::{Address, PublicKey, Signature};

/// Primary wallet authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`): authentication
/// attempts from independent callers run concurrently.
#[async_trait]
pub trait WalletAuthenticationApi: Send + Sync {
    /// Begin an authentication attempt.
    ///
    /// Issues a challenge bound to the address the caller's wallet reports
    /// as active and returns the hex-encoded envelope the external signer
    /// must sign. Holds no resources between this call and the submission.
    fn request_challenge(&self, application_name: &str, claimed_address: &Address) -> String;

    /// Complete an authentication attempt.
    ///
    /// Verifies the submission end to end and records the wallet in the
    /// member directory on success.
    ///
    /// # Errors
    ///
    /// Any failure — malformed envelope, address mismatch, expired or
    /// replayed challenge, invalid signature, directory outage — collapses
    /// to the opaque [`AuthenticationFailed`].
    async fn submit_signature(
        &self,
        envelope_hex: &str,
        signature: &Signature,
        pub_key: &PublicKey,
    ) -> Result<AccessAssertion, AuthenticationFailed>;
}
