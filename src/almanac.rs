//! Low-precision solar position algorithm.
//!
//! This follows the approximate solar coordinates of the Astronomical
//! Almanac (see also Michalsky, 'The Astronomical Almanac's algorithm for
//! approximate solar position (1950-2050)', Solar Energy 40 (1988)).
//!
//! Accuracy is on the order of 0.01° in ecliptic longitude over the
//! 1950-2050 window, which is ample for driving light geometry. The whole
//! computation is a handful of trig calls, cheap enough to run per location
//! per animation frame.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::check_coordinates;
use crate::math::{asin_deg, atan2_deg, cos_deg, normalize_degrees_0_to_360, sin_deg, tan_deg};
use crate::time::days_since_j2000;
use crate::{Result, SolarAngles};
use chrono::{DateTime, Utc};

/// Calculate the sun's azimuth and elevation for an observer.
///
/// The instant is interpreted on the UTC timeline; the model performs no
/// timezone conversion of its own.
///
/// # Arguments
/// * `instant` - UTC date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Solar angles or error
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude
/// outside ±180°)
///
/// # Example
/// ```rust
/// use lightwell::almanac;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
/// let angles = almanac::solar_angles(instant, 31.6295, -7.9811).unwrap();
///
/// assert!(angles.is_above_horizon());
/// println!("Azimuth: {:.3}°", angles.azimuth());
/// println!("Elevation: {:.3}°", angles.elevation());
/// ```
pub fn solar_angles(instant: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<SolarAngles> {
    solar_angles_from_days(days_since_j2000(instant), latitude, longitude)
}

/// Calculate solar angles from a precomputed day offset.
///
/// Takes days since the J2000.0 epoch directly, for callers that already
/// hold the offset (see [`crate::time::days_since_j2000`]).
///
/// # Errors
/// Returns error for invalid coordinates.
pub fn solar_angles_from_days(days: f64, latitude: f64, longitude: f64) -> Result<SolarAngles> {
    check_coordinates(latitude, longitude)?;

    // Mean longitude and mean anomaly of the sun
    let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.9856474 * days);
    let mean_anomaly = normalize_degrees_0_to_360(357.528 + 0.9856003 * days);

    // Ecliptic longitude with the two largest periodic corrections
    let ecliptic_longitude = normalize_degrees_0_to_360(
        mean_longitude + 1.915 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly),
    );

    // Obliquity of the ecliptic
    let obliquity = 23.439 - 0.0000004 * days;

    // Equatorial coordinates: right ascension and declination
    let right_ascension = normalize_degrees_0_to_360(atan2_deg(
        cos_deg(obliquity) * sin_deg(ecliptic_longitude),
        cos_deg(ecliptic_longitude),
    ));
    let declination = asin_deg(sin_deg(obliquity) * sin_deg(ecliptic_longitude));

    // Local sidereal time and signed hour angle
    let gmst = normalize_degrees_0_to_360(280.460 + 360.9856474 * days);
    let lst = normalize_degrees_0_to_360(gmst + longitude);
    let mut hour_angle = normalize_degrees_0_to_360(lst - right_ascension + 360.0);
    if hour_angle > 180.0 {
        hour_angle -= 360.0;
    }

    // Horizontal coordinates
    let elevation = asin_deg(
        sin_deg(latitude) * sin_deg(declination)
            + cos_deg(latitude) * cos_deg(declination) * cos_deg(hour_angle),
    );
    let azimuth = atan2_deg(
        -sin_deg(hour_angle),
        cos_deg(latitude) * tan_deg(declination) - sin_deg(latitude) * cos_deg(hour_angle),
    );

    SolarAngles::new(azimuth, elevation)
}
