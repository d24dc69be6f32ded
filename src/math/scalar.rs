use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Restricts `x` to the range `[low, high]`.
///
/// Unlike [`f64::clamp`] this does not panic when `low > high`.
#[must_use]
pub fn clamp(x: f64, low: f64, high: f64) -> f64 {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}

/// Wraps `n` into the half-open interval `[min, max)`.
///
/// Values already inside the interval are returned unchanged, so no
/// rounding is introduced for the common case.
#[must_use]
pub fn wrap(n: f64, min: f64, max: f64) -> f64 {
    if n >= min && n < max {
        n
    } else {
        modulo(n - min, max - min) + min
    }
}

/// Returns the non-negative remainder of `x / m`.
#[must_use]
pub fn modulo(x: f64, m: f64) -> f64 {
    (x % m + m) % m
}

/// Returns the Mercator Y coordinate of a latitude in radians.
#[must_use]
pub fn mercator(lat: f64) -> f64 {
    (lat * 0.5 + FRAC_PI_4).tan().ln()
}

/// Returns the latitude in radians of a Mercator Y coordinate.
#[must_use]
pub fn inverse_mercator(y: f64) -> f64 {
    2.0 * y.exp().atan() - FRAC_PI_2
}

/// Rounds `value` to `scale` decimal places, halves away from zero.
#[must_use]
pub fn round_half_up(value: f64, scale: i32) -> f64 {
    let factor = 10_f64.powi(scale);
    (value * factor).round() / factor
}
