//! # Login Challenge
//!
//! The server-issued, time-bounded, single-use claim a wallet proves key
//! control over by signing. The challenge renders to a human-readable claim
//! text (`Tezos Signed Message: ` + JSON payload); the envelope codec in
//! `shared-crypto` turns that text into the exact bytes the wallet signs.

use crate::entities::Address;
use crate::errors::TypeError;
use serde::{Deserialize, Serialize};

/// Purpose tag embedded in every login claim.
pub const PURPOSE_TAG: &str = "auth";

/// Prefix wallets prepend to off-chain signed message text.
pub const SIGNED_MESSAGE_PREFIX: &str = "Tezos Signed Message: ";

// =============================================================================
// Claim Payload
// =============================================================================

/// The JSON object embedded in the signed claim text.
///
/// Field order is fixed by this struct so that the rendered claim text is
/// byte-for-byte reproducible on the server side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayload {
    /// Purpose tag, always [`PURPOSE_TAG`] for login claims
    #[serde(rename = "type")]
    pub purpose: String,
    /// Application the challenge was issued for
    pub name: String,
    /// Claimed wallet address (public key hash)
    pub pkh: String,
    /// High-entropy nonce, hex-encoded
    pub nonce: String,
}

impl ClaimPayload {
    /// Parse a claim text back into its payload.
    ///
    /// Fails with [`TypeError::MalformedClaim`] if the signed-message prefix
    /// is missing, the remainder is not valid JSON, or the purpose tag is
    /// not `"auth"`.
    pub fn parse(claim_text: &str) -> Result<Self, TypeError> {
        let json = claim_text
            .strip_prefix(SIGNED_MESSAGE_PREFIX)
            .ok_or(TypeError::MalformedClaim)?;

        let payload: ClaimPayload =
            serde_json::from_str(json).map_err(|_| TypeError::MalformedClaim)?;

        if payload.purpose != PURPOSE_TAG {
            return Err(TypeError::MalformedClaim);
        }

        Ok(payload)
    }
}

// =============================================================================
// Challenge
// =============================================================================

/// A login challenge issued for one authentication attempt.
///
/// Lifecycle: created by the challenge issuer, consumed exactly once by a
/// successful verification, or expires after the issuer's TTL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// High-entropy nonce, hex-encoded
    pub nonce: String,
    /// Address the wallet reported as active when requesting the challenge
    pub claimed_address: Address,
    /// Unix timestamp (seconds) at issuance
    pub issued_at: u64,
    /// Application name embedded in the claim
    pub application_name: String,
}

impl Challenge {
    /// Render the claim text the external signer will be asked to sign.
    pub fn claim_text(&self) -> String {
        let payload = ClaimPayload {
            purpose: PURPOSE_TAG.to_string(),
            name: self.application_name.clone(),
            pkh: self.claimed_address.as_str().to_string(),
            nonce: self.nonce.clone(),
        };

        let json = serde_json::to_string(&payload)
            .expect("claim payload of plain strings serializes to JSON");

        format!("{SIGNED_MESSAGE_PREFIX}{json}")
    }
}

// =============================================================================
// TESTS
// =============================================================================
