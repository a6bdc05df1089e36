//! Validate the solar ephemeris against independently computed reference data.

use chrono::{DateTime, Utc};
use lightwell::almanac;

const EPSILON: f64 = 1e-9; // Same formulas in IEEE doubles; headroom for libm rounding

#[test]
fn validate_against_reference_table() {
    // Expected angles computed independently from the same almanac formulas
    let test_cases = [
        // Format: (datetime, lat, lon, expected_azimuth, expected_elevation)
        (
            "2026-03-21T12:00:00Z",
            31.6295,
            -7.9811,
            161.64426950429038,
            57.38420512011281,
        ),
        (
            "2026-03-21T12:30:00Z",
            31.6295,
            -7.9811,
            175.6303631573326,
            58.6566316855664,
        ),
        (
            "2026-03-21T15:00:00Z",
            31.6295,
            -7.9811,
            233.79258571087865,
            44.355292984570376,
        ),
        (
            "2026-06-21T12:00:00Z",
            51.5074,
            -0.1278,
            178.86021893375636,
            61.9240360847619,
        ),
        (
            "2026-01-14T00:00:00Z",
            51.5074,
            -0.1278,
            355.6578892098609,
            -59.773739991079026,
        ),
        (
            "2026-03-20T12:00:00Z",
            0.0,
            0.0,
            91.33408348300536,
            88.13357939308003,
        ),
        (
            "2026-01-14T13:00:00Z",
            64.1355,
            -21.8954,
            171.44063748717514,
            4.326063453969138,
        ),
        (
            "2026-08-22T09:00:00Z",
            41.3851,
            2.1734,
            115.14787170686587,
            41.806964922606056,
        ),
        (
            "2026-08-22T09:00:00Z",
            15.3229,
            38.9251,
            117.76201706562753,
            82.46372261339131,
        ),
        (
            "2026-01-14T12:00:00Z",
            78.2232,
            15.6267,
            192.62639393319185,
            -9.770310961250248,
        ),
        (
            "2026-06-21T00:30:00Z",
            78.2232,
            15.6267,
            21.261199463364317,
            12.507621541262646,
        ),
    ];

    for (datetime_str, latitude, longitude, expected_azimuth, expected_elevation) in test_cases {
        let instant = datetime_str.parse::<DateTime<Utc>>().unwrap();
        let angles = almanac::solar_angles(instant, latitude, longitude).unwrap();

        let azimuth_error = (angles.azimuth() - expected_azimuth).abs();
        let elevation_error = (angles.elevation() - expected_elevation).abs();

        println!(
            "{datetime_str} ({latitude}, {longitude}): azimuth {:.9}° (expected {:.9}°, error {:.2e}), elevation {:.9}° (expected {:.9}°, error {:.2e})",
            angles.azimuth(),
            expected_azimuth,
            azimuth_error,
            angles.elevation(),
            expected_elevation,
            elevation_error
        );

        assert!(
            azimuth_error < EPSILON,
            "azimuth error {azimuth_error:.2e} exceeds tolerance for {datetime_str}"
        );
        assert!(
            elevation_error < EPSILON,
            "elevation error {elevation_error:.2e} exceeds tolerance for {datetime_str}"
        );
    }
}

#[test]
fn angles_stay_in_documented_ranges_across_the_globe() {
    // Coarse sweep over season, time of day, latitude and longitude
    for date in ["2026-03-21", "2026-06-21", "2026-12-21"] {
        for hour in (0..24).step_by(3) {
            for lat_step in -3_i32..=3 {
                for lon_step in -3_i32..=3 {
                    let latitude = f64::from(lat_step) * 28.0;
                    let longitude = f64::from(lon_step) * 58.0;
                    let instant = format!("{date}T{hour:02}:00:00Z")
                        .parse::<DateTime<Utc>>()
                        .unwrap();

                    let angles = almanac::solar_angles(instant, latitude, longitude).unwrap();

                    assert!(
                        angles.azimuth() >= 0.0 && angles.azimuth() < 360.0,
                        "azimuth {} out of range at ({latitude}, {longitude}) {instant}",
                        angles.azimuth()
                    );
                    assert!(
                        angles.elevation() > -90.0 && angles.elevation() <= 90.0,
                        "elevation {} out of range at ({latitude}, {longitude}) {instant}",
                        angles.elevation()
                    );
                }
            }
        }
    }
}

#[test]
fn equator_equinox_noon_is_near_zenith() {
    let instant = "2026-03-20T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let angles = almanac::solar_angles(instant, 0.0, 0.0).unwrap();

    assert!(
        angles.elevation() > 88.0,
        "expected near-zenith noon elevation at the equator, got {}",
        angles.elevation()
    );
}

#[test]
fn repeated_computation_is_bit_identical() {
    let instant = "2026-08-22T09:00:00Z".parse::<DateTime<Utc>>().unwrap();

    let first = almanac::solar_angles(instant, 41.3851, 2.1734).unwrap();
    let second = almanac::solar_angles(instant, 41.3851, 2.1734).unwrap();

    assert_eq!(first, second);
}
