//! Shared angle and sector arithmetic.
//!
//! Every partition of the circle used by this crate (12 rashis, 27
//! nakshatras, 108 padas) is an equal division of [0, 360) into half-open
//! sectors `[start, end)`. Boundaries are always computed as
//! `index * 360 / count` so that nested partitions share bit-identical
//! boundary values (pada 4k starts exactly where nakshatra k starts).

use crate::error::ClassifyError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0; -0.0 folds to 0.0
    if r >= 360.0 || r == 0.0 { 0.0 } else { r }
}

/// Reject non-finite input, then normalize to [0, 360).
pub fn normalize_checked(deg: f64) -> Result<f64, ClassifyError> {
    if !deg.is_finite() {
        return Err(ClassifyError::InvalidLongitude(deg));
    }
    Ok(normalize_360(deg))
}

/// Start longitude of the 0-based sector `index` in an equal `count`-fold division.
pub fn sector_start(index: usize, count: usize) -> f64 {
    (index as f64 * 360.0) / count as f64
}

/// 0-based sector containing a normalized longitude.
///
/// The floor estimate can land one sector off when `lon` sits within an ulp
/// of a boundary, so it is corrected against [`sector_start`]. The result is
/// the largest `i` with `sector_start(i) <= lon`.
pub fn sector_index(lon: f64, count: usize) -> usize {
    let estimate = ((lon * count as f64 / 360.0).floor() as usize).min(count - 1);
    if estimate + 1 < count && lon >= sector_start(estimate + 1, count) {
        estimate + 1
    } else if estimate > 0 && lon < sector_start(estimate, count) {
        estimate - 1
    } else {
        estimate
    }
}

/// Validate a 1-based number against `1..=max`, returning the 0-based index.
pub(crate) fn check_number(
    kind: &'static str,
    value: u32,
    max: u32,
) -> Result<usize, ClassifyError> {
    if value == 0 || value > max {
        return Err(ClassifyError::InvalidIndex { kind, value, max });
    }
    Ok((value - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_is_zero() {
        assert_eq!(normalize_360(-1e-20), 0.0);
        assert_eq!(normalize_360(-0.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn checked_rejects_non_finite() {
        assert!(matches!(
            normalize_checked(f64::NAN),
            Err(ClassifyError::InvalidLongitude(_))
        ));
        assert!(normalize_checked(f64::INFINITY).is_err());
        assert!(normalize_checked(f64::NEG_INFINITY).is_err());
        assert_eq!(normalize_checked(370.0), Ok(normalize_360(370.0)));
    }

    #[test]
    fn sector_index_on_every_boundary() {
        for count in [12, 27, 108] {
            for i in 0..count {
                assert_eq!(sector_index(sector_start(i, count), count), i, "count {count} i {i}");
            }
        }
    }

    #[test]
    fn sector_index_just_below_boundary() {
        for count in [12, 27, 108] {
            for i in 1..count {
                let below = f64::from_bits(sector_start(i, count).to_bits() - 1);
                assert_eq!(sector_index(below, count), i - 1, "count {count} i {i}");
            }
        }
    }

    #[test]
    fn sector_index_top_of_circle() {
        assert_eq!(sector_index(359.999_999, 27), 26);
        assert_eq!(sector_index(f64::from_bits(360.0_f64.to_bits() - 1), 108), 107);
    }

    #[test]
    fn nested_boundaries_identical() {
        for k in 0..27 {
            assert_eq!(sector_start(k, 27).to_bits(), sector_start(4 * k, 108).to_bits());
        }
        for k in 0..12 {
            assert_eq!(sector_start(k, 12).to_bits(), sector_start(9 * k, 108).to_bits());
        }
    }

    #[test]
    fn check_number_range() {
        assert_eq!(check_number("rashi", 1, 12), Ok(0));
        assert_eq!(check_number("rashi", 12, 12), Ok(11));
        assert!(check_number("rashi", 0, 12).is_err());
        assert!(check_number("rashi", 13, 12).is_err());
    }
}
