//! Shared key generation for storage backends.
//!
//! Key format: `{prefix}/form_{unix_millis}.csv`.

use chrono::{DateTime, Utc};

/// Generate the object key for a submission serialized at `at`.
///
/// The millisecond timestamp is the only discriminator: two submissions
/// landing on the same millisecond produce the same key and the later write
/// silently overwrites the earlier one. That window is an accepted limitation
/// of the key scheme, not an error path.
pub fn response_key(prefix: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}/form_{}.csv",
        prefix.trim_end_matches('/'),
        at.timestamp_millis()
    )
}
