//! Mathematical utilities for solar geometry and dimmer curves.

#![allow(clippy::many_single_char_names)]

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Computes the sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Computes the cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Computes the tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Computes the arcsine of `x`, returning degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Computes atan2(y, x), returning degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Linearly remaps a value from one range onto another.
///
/// The mapping is not clamped: values outside the input range extrapolate
/// beyond the output range. Pair with [`constrain`] where bounds matter.
#[inline]
pub fn remap(value: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    to_start + (value - from_start) / (from_end - from_start) * (to_end - to_start)
}

/// Constrains a value to the inclusive range [low, high].
#[inline]
pub fn constrain(value: f64, low: f64, high: f64) -> f64 {
    value.clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(0.0)).abs() < EPSILON);

        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!((sin_deg(0.0)).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(0.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(180.0) + 1.0).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);

        assert!((asin_deg(1.0) - 90.0).abs() < EPSILON);
        assert!((atan2_deg(1.0, 1.0) - 45.0).abs() < EPSILON);
        assert!((atan2_deg(1.0, 0.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_remap() {
        // Midpoint of the input range lands on the midpoint of the output
        assert!((remap(6.0, 0.0, 12.0, 0.0, 70.0) - 35.0).abs() < EPSILON);
        // Identity-range endpoints
        assert_eq!(remap(0.0, 0.0, 12.0, 0.0, 70.0), 0.0);
        assert_eq!(remap(12.0, 0.0, 12.0, 0.0, 70.0), 70.0);
        // Descending output range
        assert!((remap(210.0, 180.0, 240.0, 35.0, 25.0) - 30.0).abs() < EPSILON);
        // Out-of-range input extrapolates
        assert!((remap(24.0, 0.0, 12.0, 0.0, 70.0) - 140.0).abs() < EPSILON);
        assert!((remap(-6.0, 0.0, 12.0, 0.0, 70.0) + 35.0).abs() < EPSILON);
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(50.0, 0.0, 70.0), 50.0);
        assert_eq!(constrain(-10.0, 0.0, 70.0), 0.0);
        assert_eq!(constrain(140.0, 0.0, 70.0), 70.0);
        assert_eq!(constrain(70.0, 0.0, 70.0), 70.0);
    }
}
