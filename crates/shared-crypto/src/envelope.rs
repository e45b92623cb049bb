//! # Signed-Message Envelope Codec
//!
//! Encodes and decodes the exact byte sequence a wallet is asked to sign:
//!
//! ```text
//! 0x05 0x01 | len(claim_text_utf8) as u32 big-endian | claim_text_utf8
//! ```
//!
//! The two-byte prefix is the Micheline packed-string tag and acts as domain
//! separation: bytes framed this way can never be a valid operation, so a
//! login signature cannot be replayed as an on-chain transfer.
//!
//! Both sides of the protocol must agree on this framing bit-exactly. The
//! length field counts UTF-8 bytes, not characters.

use crate::errors::CryptoError;

/// Domain-separation prefix of every signed-message envelope.
pub const ENVELOPE_PREFIX: [u8; 2] = [0x05, 0x01];

/// Encode a claim text into envelope bytes.
///
/// Pure and deterministic; `decode(encode(text)) == text` for all texts.
pub fn encode(claim_text: &str) -> Vec<u8> {
    let payload = claim_text.as_bytes();
    let mut bytes = Vec::with_capacity(2 + 4 + payload.len());
    bytes.extend_from_slice(&ENVELOPE_PREFIX);
    bytes.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Encode a claim text and render it as the lowercase hex wire form.
pub fn encode_hex(claim_text: &str) -> String {
    hex::encode(encode(claim_text))
}

/// Decode envelope bytes back into the claim text.
///
/// Fails with [`CryptoError::MalformedEnvelope`] if the prefix does not
/// match, the declared length disagrees with the remaining bytes, or the
/// payload is not valid UTF-8. The declared length must consume the
/// remainder exactly; trailing bytes are rejected so that a decoded
/// envelope always re-encodes to the identical byte sequence.
pub fn decode(bytes: &[u8]) -> Result<String, CryptoError> {
    if bytes.len() < 6 {
        return Err(CryptoError::MalformedEnvelope("shorter than header"));
    }
    if bytes[..2] != ENVELOPE_PREFIX {
        return Err(CryptoError::MalformedEnvelope("wrong prefix"));
    }

    let declared = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]) as usize;
    let payload = &bytes[6..];
    if payload.len() != declared {
        return Err(CryptoError::MalformedEnvelope("length mismatch"));
    }

    String::from_utf8(payload.to_vec())
        .map_err(|_| CryptoError::MalformedEnvelope("payload is not UTF-8"))
}

// =============================================================================
// TESTS
// =============================================================================
