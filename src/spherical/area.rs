use std::f64::consts::FRAC_PI_2;

use crate::geometry::GeoPoint;
use crate::math::EARTH_RADIUS;

/// Returns the area of a closed path on Earth, in square meters.
#[must_use]
pub fn compute_area<P: AsRef<GeoPoint>>(path: &[P]) -> f64 {
    compute_signed_area(path).abs()
}

/// Returns the signed area of a closed path on Earth, in square meters.
///
/// "Inside" is the surface that does not contain the South Pole; the sign
/// follows the winding of the path.
#[must_use]
pub fn compute_signed_area<P: AsRef<GeoPoint>>(path: &[P]) -> f64 {
    compute_signed_area_with_radius(path, EARTH_RADIUS)
}

/// Returns the signed area of a closed path on a sphere of the given
/// `radius`, in units of `radius` squared. Paths with fewer than three
/// points have zero area.
#[must_use]
pub fn compute_signed_area_with_radius<P: AsRef<GeoPoint>>(path: &[P], radius: f64) -> f64 {
    let Some(last) = path.last() else {
        return 0.0;
    };
    if path.len() < 3 {
        return 0.0;
    }
    let mut prev = polar_coordinates(last.as_ref());
    let mut total = 0.0;
    // Each edge and the North Pole form a "polar triangle".
    for point in path {
        let current = polar_coordinates(point.as_ref());
        total += polar_triangle_area(current, prev);
        prev = current;
    }
    total * radius * radius
}

/// Returns `(tan((pi/2 - lat) / 2), lng)` in radians.
fn polar_coordinates(point: &GeoPoint) -> (f64, f64) {
    let (lat, lng) = point.radians();
    (((FRAC_PI_2 - lat) / 2.0).tan(), lng)
}

/// Signed area of the triangle with the North Pole as a vertex, from two
/// edges and the included angle (Todhunter, Spherical Trigonometry, §103).
fn polar_triangle_area((tan1, lng1): (f64, f64), (tan2, lng2): (f64, f64)) -> f64 {
    let d_lng = lng1 - lng2;
    let t = tan1 * tan2;
    2.0 * (t * d_lng.sin()).atan2(1.0 + t * d_lng.cos())
}
