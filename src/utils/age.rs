//! Age calculation from a birth timestamp.

use chrono::{DateTime, Utc};

/// Seconds in a fixed 365-day year. Leap days are deliberately ignored;
/// an off-by-hours error is invisible at whole-year granularity.
const SECONDS_PER_YEAR: i64 = 60 * 60 * 24 * 365;

/// Calculate a whole-year age from a unix birth timestamp.
///
/// Elapsed 365-day years, truncated toward zero. A birth timestamp in the
/// future yields 0 rather than a negative age.
pub fn calculate_age(birth_timestamp: i64, now: DateTime<Utc>) -> i32 {
    let elapsed = now.timestamp() - birth_timestamp;
    (elapsed / SECONDS_PER_YEAR).max(0) as i32
}
