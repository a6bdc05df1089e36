//! Error types for the facade daylight simulation.

use crate::math::normalize_degrees_0_to_360;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle for a solar position.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid wall bearing (must be a finite compass angle).
    InvalidBearing {
        /// The invalid bearing value provided.
        value: f64,
    },
    /// Invalid key binding for a location toggle (must be 1 through 9).
    InvalidKeyBinding {
        /// The invalid key value provided.
        value: u8,
    },
    /// Two locations bound to the same toggle key.
    DuplicateKeyBinding {
        /// The key value bound more than once.
        value: u8,
    },
    /// Invalid scene configuration value (dimension, rate or layout).
    InvalidConfiguration {
        /// Description of the configuration constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., non-finite intermediate).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidBearing { value } => {
                write!(f, "invalid wall bearing {value}° (must be finite)")
            }
            Self::InvalidKeyBinding { value } => {
                write!(f, "invalid key binding {value} (must be 1 through 9)")
            }
            Self::DuplicateKeyBinding { value } => {
                write!(f, "duplicate key binding {value} (each location needs its own key)")
            }
            Self::InvalidConfiguration { message } => {
                write!(f, "invalid configuration: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid wall bearing error.
    #[must_use]
    pub const fn invalid_bearing(value: f64) -> Self {
        Self::InvalidBearing { value }
    }

    /// Creates an invalid key binding error.
    #[must_use]
    pub const fn invalid_key_binding(value: u8) -> Self {
        Self::InvalidKeyBinding { value }
    }

    /// Creates a duplicate key binding error.
    #[must_use]
    pub const fn duplicate_key_binding(value: u8) -> Self {
        Self::DuplicateKeyBinding { value }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub const fn invalid_configuration(message: &'static str) -> Self {
        Self::InvalidConfiguration { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates an elevation angle to be within the range [-90, +90] degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` if the angle is not finite or outside the range.
pub fn check_elevation_angle(elevation: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(elevation)
}

/// Validates and normalizes a wall bearing to the range [0, 360) degrees.
///
/// # Errors
/// Returns `InvalidBearing` if the bearing is not finite.
pub fn check_bearing(bearing: f64) -> Result<f64> {
    if !bearing.is_finite() {
        return Err(Error::invalid_bearing(bearing));
    }
    Ok(normalize_degrees_0_to_360(bearing))
}

/// Validates a location key binding (digit keys 1 through 9).
///
/// # Errors
/// Returns `InvalidKeyBinding` for 0 or anything above 9.
pub fn check_key_binding(key: u8) -> Result<()> {
    if !(1..=9).contains(&key) {
        return Err(Error::invalid_key_binding(key));
    }
    Ok(())
}
