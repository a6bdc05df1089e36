//! Ephemeris time conversions.
//!
//! The solar model works in days since the J2000.0 epoch, derived from the
//! instant's Unix millisecond timestamp. Keeping the conversion in one place
//! makes the day offset reusable by callers that precompute it.

use chrono::{DateTime, Utc};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Converts an instant to its Julian Date.
///
/// JD = unixMillis / 86,400,000 + 2,440,587.5
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Converts an instant to days since the J2000.0 epoch.
///
/// Fractional days; negative before 2000-01-01 12:00 UTC.
#[must_use]
pub fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    julian_date(instant) - J2000_JDN
}
