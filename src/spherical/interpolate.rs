use crate::geometry::GeoPoint;
use crate::math::Vector3;

use super::compute_angle_between;

/// Below this `sin(angle)` the endpoints are treated as coincident and the
/// coordinates are interpolated linearly.
const SLERP_MIN_SIN: f64 = 1e-6;

/// Returns the point a `fraction` of the way from `from` to `to` along the
/// great circle joining them.
#[must_use]
pub fn interpolate(from: &GeoPoint, to: &GeoPoint, fraction: f64) -> GeoPoint {
    let angle = compute_angle_between(from, to);
    let sin_angle = angle.sin();
    if sin_angle < SLERP_MIN_SIN {
        return GeoPoint::new(
            from.latitude() + fraction * (to.latitude() - from.latitude()),
            from.longitude() + fraction * (to.longitude() - from.longitude()),
        );
    }
    let a = ((1.0 - fraction) * angle).sin() / sin_angle;
    let b = (fraction * angle).sin() / sin_angle;

    let v = unit_vector(from) * a + unit_vector(to) * b;
    let lat = v.z.atan2((v.x * v.x + v.y * v.y).sqrt());
    let lng = v.y.atan2(v.x);
    GeoPoint::new(lat.to_degrees(), lng.to_degrees())
}

/// Position of `point` on the unit sphere.
fn unit_vector(point: &GeoPoint) -> Vector3 {
    let (lat, lng) = point.radians();
    Vector3::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    #[test]
    fn endpoints_are_reproduced() {
        let a = p(10.0, 20.0);
        let b = p(-30.0, 60.0);
        let start = interpolate(&a, &b, 0.0);
        let end = interpolate(&a, &b, 1.0);
        assert_abs_diff_eq!(start.latitude(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(start.longitude(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.latitude(), -30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.longitude(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn midpoint_on_equator() {
        let mid = interpolate(&p(0.0, 0.0), &p(0.0, 90.0), 0.5);
        assert_abs_diff_eq!(mid.latitude(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mid.longitude(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn midpoint_over_pole() {
        let mid = interpolate(&p(45.0, 0.0), &p(45.0, 180.0), 0.5);
        assert_abs_diff_eq!(mid.latitude(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn coincident_points_fall_back_to_linear() {
        let a = p(1.0, 1.0);
        let b = p(1.0 + 1e-9, 1.0 - 1e-9);
        let mid = interpolate(&a, &b, 0.5);
        assert_abs_diff_eq!(mid.latitude(), 1.0 + 0.5e-9, epsilon = 1e-15);
        assert_abs_diff_eq!(mid.longitude(), 1.0 - 0.5e-9, epsilon = 1e-15);
    }
}
