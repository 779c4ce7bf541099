//! Collision-resistant session identifier generation.
//!
//! Identifiers are a fixed prefix plus 13 characters of base32-hex over
//! 8 bytes: 4 bytes of big-endian Unix seconds followed by 4 cryptographically
//! random bytes. Base32-hex preserves byte order lexicographically, so ids
//! sort by creation time at second granularity while staying
//! collision-resistant and fixed-width.

use data_encoding::BASE32HEX;
use rand::RngCore;

/// Textual prefix of every session identifier.
pub const FLOW_PREFIX: &str = "F.";

/// Length of the encoded code following the prefix.
pub const FLOW_ID_CODE_LEN: usize = 13;

/// Generate a fresh session identifier.
///
/// The client id does not participate in the encoding; it is accepted so id
/// sources can partition by client if they ever need to.
#[must_use]
pub fn new_flow_id(_client_id: &str) -> String {
    let mut random = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut random);
    let now = u32::try_from(chrono::Utc::now().timestamp()).unwrap_or(u32::MAX);
    encode_flow_id(now, random)
}

/// Encode an identifier from its two components. Split out from
/// [`new_flow_id`] so time-ordering is testable without sleeping.
#[must_use]
pub fn encode_flow_id(unix_secs: u32, random: [u8; 4]) -> String {
    let mut buf = [0u8; 8];
    buf[..4].copy_from_slice(&unix_secs.to_be_bytes());
    buf[4..].copy_from_slice(&random);
    let code = BASE32HEX.encode(&buf);
    format!("{FLOW_PREFIX}{}", &code[..FLOW_ID_CODE_LEN])
}

// ── Unit tests ───────────────────────────────────────────────────────────────
