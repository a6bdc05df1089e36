//! Overlay text for the simulated facade.
//!
//! Formats one status line per frame: simulated date and GMT time, the
//! wall's compass label and bearing, and the leading location's solar
//! angles and sun events. A [`DisplaySink`] is the outward edge; the
//! library never writes to a screen or DOM itself.

use crate::math::normalize_degrees_0_to_360;
use crate::types::{SolarAngles, SunEvents};
use chrono::{DateTime, Utc};

/// Consumer of formatted overlay lines.
pub trait DisplaySink {
    /// Renders one overlay line.
    fn render(&mut self, text: &str);
}

/// Collects overlay lines; useful in tests and headless runs.
impl DisplaySink for Vec<String> {
    fn render(&mut self, text: &str) {
        self.push(text.to_owned());
    }
}

/// One location's contribution to the overlay.
#[derive(Debug, Clone, Copy)]
pub struct OverlayEntry<'a> {
    /// Location name
    pub name: &'a str,
    /// Solar angles at the frame's instant
    pub angles: SolarAngles,
    /// Sunrise/sunset for the frame's date
    pub events: SunEvents,
}

/// Eight-point compass label for a wall bearing.
///
/// Buckets are 45° wide with inclusive lower and exclusive upper edges,
/// except the block around due west: bearings short of 270° stay
/// "South-West", 270° itself reads "South", and past it the label swings
/// to "South-East".
///
/// # Example
/// ```
/// # use lightwell::display::compass_direction;
/// assert_eq!(compass_direction(245.0), "South-West");
/// assert_eq!(compass_direction(0.0), "North");
/// ```
#[must_use]
pub fn compass_direction(bearing: f64) -> &'static str {
    let bearing = normalize_degrees_0_to_360(bearing);
    if !(22.5..337.5).contains(&bearing) {
        "North"
    } else if bearing < 67.5 {
        "North-East"
    } else if bearing < 112.5 {
        "East"
    } else if bearing < 157.5 {
        "South-East"
    } else if bearing < 202.5 {
        "South"
    } else if bearing < 247.5 {
        "South-West"
    } else if bearing < 292.5 {
        if bearing < 270.0 {
            "South-West"
        } else if bearing > 270.0 {
            "South-East"
        } else {
            "South"
        }
    } else {
        "West"
    }
}

/// Builds the overlay line for one frame.
///
/// The first entry supplies the numeric fields; additional enabled
/// locations contribute their names only. With no entries the line
/// carries just the date, wall and time.
#[must_use]
pub fn format_overlay(
    instant: DateTime<Utc>,
    bearing: f64,
    entries: &[OverlayEntry<'_>],
) -> String {
    let date_str = instant.format("%b %-d, %Y");
    let time_str = instant.format("%H:%M:%S");
    let compass = compass_direction(bearing);

    match entries.first() {
        None => format!("{date_str} | no active location | {compass} Wall ({bearing}°) | GMT {time_str}"),
        Some(first) => {
            let names: Vec<&str> = entries.iter().map(|entry| entry.name).collect();
            format!(
                "{date_str} | {names} | {compass} Wall ({bearing}°) | GMT {time_str} | \
                 Elevation: {elevation:.1}° | Azimuth: {azimuth:.1}° | \
                 Sunrise: {sunrise} | Sunset: {sunset}",
                names = names.join(" + "),
                elevation = first.angles.elevation(),
                azimuth = first.angles.azimuth(),
                sunrise = format_event(first.events.sunrise()),
                sunset = format_event(first.events.sunset()),
            )
        }
    }
}

fn format_event(event: Option<DateTime<Utc>>) -> String {
    event.map_or_else(|| "N/A".to_owned(), |instant| instant.format("%H:%M").to_string())
}
