//! Property tests for the coordinate encoding.
//!
//! - Hemisphere letters follow the sign, zero has none
//! - Decomposed parts add back up to the input
//! - Minutes and seconds stay inside their sexagesimal ranges
//! - Short decimals encode exactly, in lowest terms

use geotag::coordinates::{Axis, HemisphereLabels, Rational, decompose, to_rational};
use proptest::prelude::*;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

// ============================================================================
// Decomposer Properties
// ============================================================================

/// Property: Positive latitudes are north, negative ones south
#[test]
fn proptest_hemisphere_follows_sign() {
    proptest!(|(v in 1e-9f64..90.0)| {
        let north = decompose(v, HemisphereLabels::LATITUDE).unwrap();
        prop_assert_eq!(north.hemisphere, Some('N'));

        let south = decompose(-v, HemisphereLabels::LATITUDE).unwrap();
        prop_assert_eq!(south.hemisphere, Some('S'));
    });
}

#[test]
fn zero_has_no_hemisphere() {
    let dms = decompose(0.0, HemisphereLabels::LATITUDE).unwrap();
    assert_eq!(dms.hemisphere, None);
    assert_eq!(dms.hemisphere_ref(), "");
}

/// Property: degrees + minutes/60 + seconds/3600 restores |v|
#[test]
fn proptest_parts_add_back_up() {
    proptest!(|(v in -180.0f64..=180.0)| {
        let dms = decompose(v, HemisphereLabels::LONGITUDE).unwrap();
        prop_assert!((dms.magnitude() - v.abs()).abs() < 1e-4);
        prop_assert!((dms.to_decimal(HemisphereLabels::LONGITUDE) - v).abs() < 1e-4);
    });
}

/// Property: minutes in [0, 59], seconds in [0, 60)
#[test]
fn proptest_fields_stay_in_range() {
    proptest!(|(v in -90.0f64..=90.0)| {
        let dms = Axis::Latitude.decompose(v).unwrap();
        prop_assert!(dms.minutes <= 59);
        prop_assert!((0.0..60.0).contains(&dms.seconds));
    });
}

// ============================================================================
// Rational Encoder Properties
// ============================================================================

/// Property: A decimal with at most five fraction digits encodes exactly
#[test]
fn proptest_short_decimals_are_exact() {
    proptest!(|(units in 0i64..=648_000_000_000, scale in 0u32..=5)| {
        // units / 10^scale covers every 5-digit decimal up to 6.48 million
        let denominator = 10u64.pow(scale);
        let whole = units / denominator as i64;
        let fraction = units % denominator as i64;
        let text = if scale == 0 {
            whole.to_string()
        } else {
            format!("{whole}.{fraction:0width$}", width = scale as usize)
        };
        let value: f64 = text.parse().unwrap();

        let rational = to_rational(value).unwrap();
        let expected = Rational::new(units, denominator).unwrap();
        prop_assert_eq!(rational, expected);
    });
}

/// Property: Output is always in lowest terms
#[test]
fn proptest_output_is_reduced() {
    proptest!(|(thousandths in -100_000_000i64..100_000_000)| {
        let rational = to_rational(thousandths as f64 / 1000.0).unwrap();
        prop_assert!(rational.denominator() >= 1);
        if rational.numerator() != 0 {
            prop_assert_eq!(gcd(rational.numerator().unsigned_abs(), rational.denominator()), 1);
        } else {
            prop_assert_eq!(rational.denominator(), 1);
        }
    });
}

/// Property: Every decomposed field of a valid coordinate encodes
#[test]
fn proptest_decomposed_fields_always_encode() {
    proptest!(|(v in -180.0f64..=180.0)| {
        let dms = Axis::Longitude.decompose(v).unwrap();
        let seconds = to_rational(dms.seconds).unwrap();
        prop_assert!((seconds.to_f64() - dms.seconds).abs() < 1e-9);
        prop_assert!(seconds.to_exif().is_ok());
    });
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn paris_latitude() {
    let dms = decompose(48.85826, HemisphereLabels::LATITUDE).unwrap();
    assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.hemisphere), (48, 51, 29.736, Some('N')));
}

#[test]
fn eiffel_tower_area_longitude() {
    let dms = decompose(-2.29448, HemisphereLabels::LONGITUDE).unwrap();
    assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.hemisphere), (2, 17, 40.128, Some('W')));
}

#[test]
fn seconds_as_rational() {
    let rational = to_rational(29.736).unwrap();
    assert_eq!((rational.numerator(), rational.denominator()), (3717, 125));
}

#[test]
fn zero_coordinate() {
    let dms = decompose(0.0, HemisphereLabels::LATITUDE).unwrap();
    assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.hemisphere), (0, 0, 0.0, None));
}
