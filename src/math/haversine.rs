//! Haversine building blocks.
//!
//! All angles are in radians on the unit sphere. Working in haversine space
//! keeps small distances well conditioned, where `acos`-based formulas lose
//! most of their significant digits.

/// Returns `hav(x) = sin(x / 2)^2 = (1 - cos(x)) / 2`.
#[must_use]
pub fn hav(x: f64) -> f64 {
    let sin_half = (x * 0.5).sin();
    sin_half * sin_half
}

/// Inverse haversine, `2 * asin(sqrt(x))`.
///
/// The argument must be in `[0, 1]`; the result is non-negative.
#[must_use]
pub fn arc_hav(x: f64) -> f64 {
    2.0 * x.sqrt().asin()
}

/// Given `h == hav(x)`, returns `sin(|x|)`.
#[must_use]
pub fn sin_from_hav(h: f64) -> f64 {
    2.0 * (h * (1.0 - h)).sqrt()
}

/// Returns `hav(asin(x))`. NaN when `|x| > 1`.
#[must_use]
pub fn hav_from_sin(x: f64) -> f64 {
    let x2 = x * x;
    x2 / (1.0 + (1.0 - x2).sqrt()) * 0.5
}

/// Returns `sin(arc_hav(x) + arc_hav(y))`.
#[must_use]
pub fn sin_sum_from_hav(x: f64, y: f64) -> f64 {
    let a = (x * (1.0 - x)).sqrt();
    let b = (y * (1.0 - y)).sqrt();
    2.0 * (a + b - 2.0 * (a * y + b * x))
}

/// Returns `hav()` of the distance between `(lat1, _)` and `(lat2, _ + d_lng)`.
#[must_use]
pub fn hav_distance(lat1: f64, lat2: f64, d_lng: f64) -> f64 {
    hav(lat1 - lat2) + hav(d_lng) * lat1.cos() * lat2.cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-12;

    #[test]
    fn hav_known_values() {
        assert_abs_diff_eq!(hav(0.0), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(hav(PI), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(hav(FRAC_PI_2), 0.5, epsilon = TOL);
    }

    #[test]
    fn arc_hav_inverts_hav() {
        for x in [0.0, 1e-9, 0.3, 1.0, 2.5, PI] {
            assert_abs_diff_eq!(arc_hav(hav(x)), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn sin_from_hav_matches_sin() {
        for x in [0.1_f64, 0.7, 1.4, 2.9] {
            assert_abs_diff_eq!(sin_from_hav(hav(x)), x.sin().abs(), epsilon = TOL);
        }
    }

    #[test]
    fn hav_from_sin_matches_hav_asin() {
        for x in [-0.9_f64, -0.2, 0.0, 0.4, 1.0] {
            assert_abs_diff_eq!(hav_from_sin(x), hav(x.asin()), epsilon = TOL);
        }
    }

    #[test]
    fn hav_from_sin_out_of_domain_is_nan() {
        assert!(hav_from_sin(1.5).is_nan());
    }

    #[test]
    fn sin_sum_from_hav_matches_direct_sum() {
        for (a, b) in [(0.2_f64, 0.3_f64), (1.0, 1.2), (0.05, 2.8), (2.0, 2.0)] {
            let expected = (a + b).sin();
            assert_abs_diff_eq!(sin_sum_from_hav(hav(a), hav(b)), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn hav_distance_along_meridian_and_equator() {
        let d = 0.4;
        assert_abs_diff_eq!(hav_distance(0.1, 0.1 + d, 0.0), hav(d), epsilon = TOL);
        assert_abs_diff_eq!(hav_distance(0.0, 0.0, d), hav(d), epsilon = TOL);
    }
}
