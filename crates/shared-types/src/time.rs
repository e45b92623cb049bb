//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in seconds.
///
/// Will NOT panic: if the system clock is before UNIX_EPOCH (which should
/// never happen on any sane system), it returns 0.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
