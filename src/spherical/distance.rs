use crate::geometry::GeoPoint;
use crate::math::{arc_hav, hav_distance, EARTH_RADIUS};

/// Distance on the unit sphere between two positions given in radians.
pub(crate) fn distance_radians(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    arc_hav(hav_distance(lat1, lat2, lng1 - lng2))
}

/// Returns the angle between two points in radians, i.e. their distance on
/// the unit sphere.
#[must_use]
pub fn compute_angle_between(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (from_lat, from_lng) = from.radians();
    let (to_lat, to_lng) = to.radians();
    distance_radians(from_lat, from_lng, to_lat, to_lng)
}

/// Returns the great-circle distance between two points, in meters.
#[must_use]
pub fn compute_distance_between(from: &GeoPoint, to: &GeoPoint) -> f64 {
    compute_angle_between(from, to) * EARTH_RADIUS
}

/// Returns the length of `path` in meters. Paths with fewer than two points
/// have zero length.
#[must_use]
pub fn compute_length<P: AsRef<GeoPoint>>(path: &[P]) -> f64 {
    let angle: f64 = path
        .windows(2)
        .map(|pair| compute_angle_between(pair[0].as_ref(), pair[1].as_ref()))
        .sum();
    angle * EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    #[test]
    fn one_degree_on_equator() {
        let d = compute_distance_between(&p(0.0, 0.0), &p(0.0, 1.0));
        assert_relative_eq!(d, EARTH_RADIUS * PI / 180.0, max_relative = 1e-12);
        assert_abs_diff_eq!(d, 111_195.08, epsilon = 0.01);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = p(48.858, 2.294);
        let b = p(40.689, -74.044);
        assert_abs_diff_eq!(compute_distance_between(&a, &b), compute_distance_between(&b, &a));
        assert_abs_diff_eq!(compute_distance_between(&a, &a), 0.0);
    }

    #[test]
    fn antipodal_angle_is_pi() {
        let across_equator = compute_angle_between(&p(0.0, 0.0), &p(0.0, 180.0));
        assert_abs_diff_eq!(across_equator, PI, epsilon = 1e-12);
        let pole_to_pole = compute_angle_between(&p(90.0, 0.0), &p(-90.0, 0.0));
        assert_abs_diff_eq!(pole_to_pole, PI, epsilon = 1e-12);
    }

    #[test]
    fn length_of_short_paths_is_zero() {
        assert_abs_diff_eq!(compute_length::<GeoPoint>(&[]), 0.0);
        assert_abs_diff_eq!(compute_length(&[p(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn length_sums_segments() {
        let path = [p(0.0, 0.0), p(0.0, 90.0), p(90.0, 90.0)];
        assert_relative_eq!(compute_length(&path), PI * EARTH_RADIUS, max_relative = 1e-12);
    }
}
