//! Sunrise and sunset detection for the simulated day.
//!
//! Events are found by brute force: the solar model is evaluated at every
//! minute of the calendar day and the horizon crossings are read off the
//! elevation sign. That is 1440 model evaluations per day and location,
//! which is why results are memoized per date in [`SunEventCache`] rather
//! than recomputed on every frame.

use crate::almanac::solar_angles;
use crate::error::check_coordinates;
use crate::types::{GeoLocation, SunEvents};
use crate::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Minutes scanned per calendar day.
const MINUTES_PER_DAY: i64 = 1440;

/// Finds sunrise and sunset for one calendar day by minute scan.
///
/// Sunrise is the first minute whose elevation is above zero; sunset is the
/// minute before the first later sample that drops below zero, i.e. the last
/// minute still lit. Either event is `None` when the day contains no such
/// crossing (polar night yields neither; a high-latitude midsummer day can
/// yield a sunrise at midnight and no sunset).
///
/// # Errors
/// Returns error for invalid coordinates.
pub fn day_events(latitude: f64, longitude: f64, date: NaiveDate) -> Result<SunEvents> {
    check_coordinates(latitude, longitude)?;

    let midnight: DateTime<Utc> = date.and_time(NaiveTime::MIN).and_utc();
    let mut sunrise: Option<DateTime<Utc>> = None;
    let mut sunset: Option<DateTime<Utc>> = None;

    for minute in 0..MINUTES_PER_DAY {
        let instant = midnight + Duration::minutes(minute);
        let elevation = solar_angles(instant, latitude, longitude)?.elevation();

        if sunrise.is_none() {
            if elevation > 0.0 {
                sunrise = Some(instant);
            }
        } else if elevation < 0.0 {
            sunset = Some(instant - Duration::minutes(1));
            break;
        }
    }

    Ok(SunEvents::new(sunrise, sunset))
}

/// Per-location memo of the latest day scan.
///
/// The display layer asks for events on every tick; the cache keys each
/// location by its toggle key and rescans only when the simulated date
/// moves on (or the location was never scanned), so one logical time update
/// costs at most one scan per location.
#[derive(Debug, Default)]
pub struct SunEventCache {
    entries: Vec<CacheEntry>,
    scans: u64,
}

#[derive(Debug)]
struct CacheEntry {
    key: u8,
    date: NaiveDate,
    events: SunEvents,
}

impl SunEventCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cached events for a location/date, scanning on a miss.
    ///
    /// # Errors
    /// Returns error for invalid coordinates.
    pub fn events_for(&mut self, location: &GeoLocation, date: NaiveDate) -> Result<SunEvents> {
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.key == location.key_binding() && e.date == date)
        {
            return Ok(entry.events);
        }

        let events = day_events(location.latitude(), location.longitude(), date)?;
        self.scans += 1;
        self.entries.retain(|e| e.key != location.key_binding());
        self.entries.push(CacheEntry {
            key: location.key_binding(),
            date,
            events,
        });
        Ok(events)
    }

    /// Gets the number of full day scans performed so far.
    #[must_use]
    pub const fn scan_count(&self) -> u64 {
        self.scans
    }
}
