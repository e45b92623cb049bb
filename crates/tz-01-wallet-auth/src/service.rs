//! # Wallet Authentication Service
//!
//! Application service implementing [`WalletAuthenticationApi`]: the
//! protocol state machine from challenge issuance through verification to
//! the member-directory upsert.
//!
//! ## Check order
//!
//! Submission checks run in a fixed order: envelope decoding, canonical
//! re-derivation, address binding, nonce consumption, signature
//! verification, directory upsert. Nonce consumption happens *before* the
//! directory write, so a challenge is never left consumable after a
//! successful verification — even if the directory write then fails, the
//! attempt cannot be replayed.

use crate::domain::challenge::{ChallengeIssuer, ConsumeOutcome};
use crate::domain::entities::AccessAssertion;
use crate::domain::errors::{AuthenticationFailed, RejectionReason};
use crate::ports::inbound::WalletAuthenticationApi;
use crate::ports::outbound::MemberDirectory;
use async_trait::async_trait;
use shared_crypto::envelope;
use shared_types::{Address, ClaimPayload, PublicKey, Signature};
use subtle::ConstantTimeEq;

/// Wallet authentication service.
///
/// Owns the challenge lifecycle exclusively; the member registry is reached
/// only through the outbound [`MemberDirectory`] port.
pub struct WalletAuthenticationService<D: MemberDirectory> {
    issuer: ChallengeIssuer,
    directory: D,
}

impl<D: MemberDirectory> WalletAuthenticationService<D> {
    /// Create a service with the default challenge TTL.
    pub fn new(directory: D) -> Self {
        Self::with_issuer(ChallengeIssuer::new(), directory)
    }

    /// Create a service around an explicit issuer (tests shorten the TTL).
    pub fn with_issuer(issuer: ChallengeIssuer, directory: D) -> Self {
        Self { issuer, directory }
    }

    /// Run every submission check, returning the internal rejection reason.
    async fn check_submission(
        &self,
        envelope_hex: &str,
        signature: &Signature,
        pub_key: &PublicKey,
    ) -> Result<AccessAssertion, RejectionReason> {
        let envelope_bytes =
            hex::decode(envelope_hex).map_err(|_| RejectionReason::MalformedEnvelope)?;
        let claim_text =
            envelope::decode(&envelope_bytes).map_err(|_| RejectionReason::MalformedEnvelope)?;
        let claim =
            ClaimPayload::parse(&claim_text).map_err(|_| RejectionReason::MalformedClaim)?;

        // The signature must cover our canonical encoding of the claim, not
        // merely whatever bytes the client chose to present.
        let canonical = envelope::encode(&claim_text);
        if !constant_time_eq(&canonical, &envelope_bytes) {
            return Err(RejectionReason::EnvelopeMismatch);
        }

        let derived = shared_crypto::derive(pub_key);
        if derived.as_str() != claim.pkh {
            return Err(RejectionReason::AddressMismatch);
        }

        let claimed = Address::new(claim.pkh);
        match self.issuer.consume(&claim.nonce, &claimed) {
            ConsumeOutcome::Consumed => {}
            ConsumeOutcome::Expired => return Err(RejectionReason::ChallengeExpired),
            ConsumeOutcome::AlreadyConsumed => return Err(RejectionReason::ChallengeReplayed),
        }

        if !shared_crypto::verify(&envelope_bytes, signature, pub_key) {
            return Err(RejectionReason::InvalidSignature);
        }

        let standing = self
            .directory
            .record_authenticated_wallet(pub_key, &derived)
            .await
            .map_err(|e| RejectionReason::DirectoryUnavailable(e.to_string()))?;

        Ok(AccessAssertion {
            address: derived,
            was_granted_access: standing.was_granted_access,
        })
    }
}

#[async_trait]
impl<D: MemberDirectory> WalletAuthenticationApi for WalletAuthenticationService<D> {
    fn request_challenge(&self, application_name: &str, claimed_address: &Address) -> String {
        let challenge = self.issuer.issue(application_name, claimed_address);
        tracing::info!(address = %claimed_address, "issued login challenge");
        envelope::encode_hex(&challenge.claim_text())
    }

    async fn submit_signature(
        &self,
        envelope_hex: &str,
        signature: &Signature,
        pub_key: &PublicKey,
    ) -> Result<AccessAssertion, AuthenticationFailed> {
        match self.check_submission(envelope_hex, signature, pub_key).await {
            Ok(assertion) => {
                tracing::info!(
                    address = %assertion.address,
                    granted = assertion.was_granted_access,
                    "wallet authenticated"
                );
                Ok(assertion)
            }
            Err(reason) => {
                // The reason stays in diagnostics; the caller gets no oracle.
                tracing::warn!(%reason, "rejected wallet authentication attempt");
                Err(AuthenticationFailed)
            }
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

// =============================================================================
// TESTS
// =============================================================================
