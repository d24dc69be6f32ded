use std::f64::consts::FRAC_PI_2;

use crate::geometry::GeoPoint;
use crate::math::{wrap, EARTH_RADIUS};

/// Returns the initial bearing from `from` to `to`, in degrees clockwise
/// from north within `[-180, 180)`.
#[must_use]
pub fn compute_heading(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (from_lat, from_lng) = from.radians();
    let (to_lat, to_lng) = to.radians();
    let d_lng = to_lng - from_lng;
    let heading = (d_lng.sin() * to_lat.cos())
        .atan2(from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lng.cos());
    wrap(heading.to_degrees(), -180.0, 180.0)
}

/// Returns the point reached by travelling `distance` meters from `from`
/// along a great circle with the given initial `heading` in degrees.
///
/// The longitude of the result is not wrapped.
#[must_use]
pub fn compute_offset(from: &GeoPoint, distance: f64, heading: f64) -> GeoPoint {
    let distance = distance / EARTH_RADIUS;
    let heading = heading.to_radians();
    let (from_lat, from_lng) = from.radians();
    let (sin_distance, cos_distance) = distance.sin_cos();
    let (sin_from_lat, cos_from_lat) = from_lat.sin_cos();
    let sin_lat = cos_distance * sin_from_lat + sin_distance * cos_from_lat * heading.cos();
    let d_lng = (sin_distance * cos_from_lat * heading.sin())
        .atan2(cos_distance - sin_from_lat * sin_lat);
    GeoPoint::new(sin_lat.asin().to_degrees(), (from_lng + d_lng).to_degrees())
}

/// Returns the origin from which travelling `distance` meters with initial
/// `heading` degrees arrives at `to`, or `None` when no such origin exists.
///
/// The latitude solves a quadratic. The root taken with `+sqrt(discriminant)`
/// is preferred; the other root is used only when the first lands outside
/// `[-90, 90]`.
#[must_use]
pub fn compute_offset_origin(to: &GeoPoint, distance: f64, heading: f64) -> Option<GeoPoint> {
    let heading = heading.to_radians();
    let distance = distance / EARTH_RADIUS;
    let n1 = distance.cos();
    let n2 = distance.sin() * heading.cos();
    let n3 = distance.sin() * heading.sin();
    let n4 = to.latitude().to_radians().sin();
    let n12 = n1 * n1;
    let discriminant = n2 * n2 * n12 + n12 * n12 - n12 * n4 * n4;
    if discriminant < 0.0 {
        return None;
    }
    let denominator = n12 + n2 * n2;
    let b = (n2 * n4 + discriminant.sqrt()) / denominator;
    let a = (n4 - n2 * b) / n1;
    let mut from_lat = a.atan2(b);
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&from_lat) {
        let b = (n2 * n4 - discriminant.sqrt()) / denominator;
        from_lat = a.atan2(b);
    }
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&from_lat) {
        return None;
    }
    let from_lng = to.longitude().to_radians()
        - n3.atan2(n1 * from_lat.cos() - n2 * from_lat.sin());
    Some(GeoPoint::new(from_lat.to_degrees(), from_lng.to_degrees()))
}
