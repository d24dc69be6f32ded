use std::f64::consts::PI;

use crate::geometry::{GeoPoint, SegmentClass};
use crate::math::{
    clamp, hav, hav_distance, hav_from_sin, inverse_mercator, mercator, sin_from_hav,
    sin_sum_from_hav, wrap, Vector2, DEFAULT_TOLERANCE, EARTH_RADIUS,
};

/// Segments whose haversine length is below this are shorter than a
/// half-circle by a wide margin, so the along-track check can be skipped.
const SHORT_SEGMENT_HAV: f64 = 0.74;

/// Finds the segment of a polyline or polygon boundary that passes within a
/// tolerance of a point.
///
/// For a polygon ([`on_edge`](Self::on_edge)) the closing segment from the
/// last vertex back to the first is included; for a polyline
/// ([`on_path`](Self::on_path)) it is not.
pub struct LocationOnPath<'a, P> {
    point: GeoPoint,
    path: &'a [P],
    closed: bool,
    segments: SegmentClass,
    tolerance: f64,
}

impl<'a, P: AsRef<GeoPoint>> LocationOnPath<'a, P> {
    /// Creates a query against an open polyline with great-circle segments
    /// and the default tolerance of 0.1 m.
    #[must_use]
    pub fn on_path(point: GeoPoint, polyline: &'a [P]) -> Self {
        Self {
            point,
            path: polyline,
            closed: false,
            segments: SegmentClass::GreatCircle,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Creates a query against the boundary of a polygon.
    #[must_use]
    pub fn on_edge(point: GeoPoint, polygon: &'a [P]) -> Self {
        Self::on_path(point, polygon).closed(true)
    }

    /// Sets whether the last vertex connects back to the first.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Selects how the vertices are joined.
    #[must_use]
    pub fn segments(mut self, segments: SegmentClass) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the tolerance in meters.
    #[must_use]
    pub fn tolerance(mut self, meters: f64) -> Self {
        self.tolerance = meters;
        self
    }

    /// Returns `true` if the point lies on or near the path.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.execute().is_some()
    }

    /// Executes the query.
    ///
    /// Returns the index `i` of the first segment `path[i]..path[i + 1]`
    /// within tolerance of the point, or `None` if there is none. A match on
    /// the closing segment of a polygon reports index 0.
    #[must_use]
    pub fn execute(&self) -> Option<usize> {
        let anchor = if self.closed {
            self.path.last()
        } else {
            self.path.first()
        }?;
        let tolerance = self.tolerance / EARTH_RADIUS;
        let start = anchor.as_ref().radians();
        let target = self.point.radians();
        let hit = match self.segments {
            SegmentClass::GreatCircle => self.index_great_circle(start, target, hav(tolerance)),
            SegmentClass::Rhumb => self.index_rhumb(start, target, tolerance),
        };
        hit.map(|idx| idx.saturating_sub(1))
    }

    /// Walks the segments, starting with `start -> path[0]`, and returns the
    /// loop index of the first one on which `target` lies.
    fn index_great_circle(
        &self,
        start: (f64, f64),
        target: (f64, f64),
        hav_tolerance: f64,
    ) -> Option<usize> {
        let mut prev = start;
        for (idx, vertex) in self.path.iter().enumerate() {
            let current = vertex.as_ref().radians();
            if is_on_segment_great_circle(prev, current, target, hav_tolerance) {
                return Some(idx);
            }
            prev = current;
        }
        None
    }

    /// Projects to Mercator space, where rhumb segments are straight, finds
    /// the closest point there, and measures the true distance to it. The
    /// Mercator-closest point is not the spherical-closest one, but the
    /// difference is negligible at small tolerances.
    fn index_rhumb(&self, start: (f64, f64), target: (f64, f64), tolerance: f64) -> Option<usize> {
        let hav_tolerance = hav(tolerance);
        let (lat3, lng3) = target;
        let min_acceptable = lat3 - tolerance;
        let max_acceptable = lat3 + tolerance;
        let y3 = mercator(lat3);
        let (mut lat1, mut lng1) = start;
        let mut y1 = mercator(lat1);
        for (idx, vertex) in self.path.iter().enumerate() {
            let (lat2, lng2) = vertex.as_ref().radians();
            let y2 = mercator(lat2);
            if lat1.max(lat2) >= min_acceptable && lat1.min(lat2) <= max_acceptable {
                // Longitudes are offset by -lng1; the segment starts at x = 0.
                let segment = Vector2::new(wrap(lng2 - lng1, -PI, PI), y2 - y1);
                let len2 = segment.norm_squared();
                let x3_base = wrap(lng3 - lng1, -PI, PI);
                // Also try the point wrapped once around the world each way.
                for x3 in [x3_base, x3_base + 2.0 * PI, x3_base - 2.0 * PI] {
                    let t = if len2 <= 0.0 {
                        0.0
                    } else {
                        clamp(Vector2::new(x3, y3 - y1).dot(&segment) / len2, 0.0, 1.0)
                    };
                    let closest = segment * t;
                    let lat_closest = inverse_mercator(y1 + closest.y);
                    if hav_distance(lat3, lat_closest, x3 - closest.x) < hav_tolerance {
                        return Some(idx);
                    }
                }
            }
            lat1 = lat2;
            lng1 = lng2;
            y1 = y2;
        }
        None
    }
}

/// Returns `sin(bearing(p1 -> p3) - bearing(p1 -> p2))`.
fn sin_delta_bearing(
    (lat1, lng1): (f64, f64),
    (lat2, lng2): (f64, f64),
    (lat3, lng3): (f64, f64),
) -> f64 {
    let sin_lat1 = lat1.sin();
    let cos_lat2 = lat2.cos();
    let cos_lat3 = lat3.cos();
    let lat31 = lat3 - lat1;
    let lng31 = lng3 - lng1;
    let lat21 = lat2 - lat1;
    let lng21 = lng2 - lng1;
    let a = lng31.sin() * cos_lat3;
    let c = lng21.sin() * cos_lat2;
    let b = lat31.sin() + 2.0 * sin_lat1 * cos_lat3 * hav(lng31);
    let d = lat21.sin() + 2.0 * sin_lat1 * cos_lat2 * hav(lng21);
    let denom = (a * a + b * b) * (c * c + d * d);
    if denom <= 0.0 {
        1.0
    } else {
        (a * d - b * c) / denom.sqrt()
    }
}

/// Whether `p3` lies within the tolerance of the great-circle segment
/// `p1 -> p2`. All positions in radians.
fn is_on_segment_great_circle(
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    hav_tolerance: f64,
) -> bool {
    let hav_dist13 = hav_distance(p1.0, p3.0, p1.1 - p3.1);
    if hav_dist13 <= hav_tolerance {
        return true;
    }
    let hav_dist23 = hav_distance(p2.0, p3.0, p2.1 - p3.1);
    if hav_dist23 <= hav_tolerance {
        return true;
    }
    let sin_bearing = sin_delta_bearing(p1, p2, p3);
    let sin_dist13 = sin_from_hav(hav_dist13);
    let hav_cross_track = hav_from_sin(sin_dist13 * sin_bearing);
    if hav_cross_track > hav_tolerance {
        return false;
    }
    let hav_dist12 = hav_distance(p1.0, p2.0, p1.1 - p2.1);
    let term = hav_dist12 + hav_cross_track * (1.0 - 2.0 * hav_dist12);
    if hav_dist13 > term || hav_dist23 > term {
        return false;
    }
    if hav_dist12 < SHORT_SEGMENT_HAV {
        return true;
    }
    let cos_cross_track = 1.0 - 2.0 * hav_cross_track;
    let hav_along_track13 = (hav_dist13 - hav_cross_track) / cos_cross_track;
    let hav_along_track23 = (hav_dist23 - hav_cross_track) / cos_cross_track;
    // The two along-track legs sum to less than a half-circle iff the sine
    // of their sum is positive.
    sin_sum_from_hav(hav_along_track13, hav_along_track23) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical::{compute_offset, interpolate};

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn path() -> Vec<GeoPoint> {
        vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0)]
    }

    #[test]
    fn empty_path_has_no_match() {
        let empty: Vec<GeoPoint> = Vec::new();
        assert_eq!(LocationOnPath::on_path(p(0.0, 0.0), &empty).execute(), None);
        assert!(!LocationOnPath::on_edge(p(0.0, 0.0), &empty).is_on());
    }

    #[test]
    fn vertices_match_at_zero_tolerance() {
        for vertex in path() {
            assert!(LocationOnPath::on_path(vertex, &path()).tolerance(0.0).is_on());
        }
    }

    #[test]
    fn vertices_match_rhumb_at_millimeter_tolerance() {
        let path = path();
        for &vertex in &path {
            let query = LocationOnPath::on_path(vertex, &path)
                .segments(SegmentClass::Rhumb)
                .tolerance(1e-3);
            assert!(query.is_on(), "{vertex}");
        }
    }

    #[test]
    fn reports_segment_index() {
        let mid_first = p(0.0, 5.0);
        let mid_second = interpolate(&p(0.0, 10.0), &p(10.0, 10.0), 0.5);
        let path = path();
        for segments in [SegmentClass::GreatCircle, SegmentClass::Rhumb] {
            let first = LocationOnPath::on_path(mid_first, &path).segments(segments);
            assert_eq!(first.execute(), Some(0));
            let second = LocationOnPath::on_path(mid_second, &path).segments(segments);
            assert_eq!(second.execute(), Some(1));
        }
    }

    #[test]
    fn far_point_is_rejected() {
        let off = compute_offset(&p(0.0, 5.0), 1_000.0, 0.0);
        let path = path();
        for segments in [SegmentClass::GreatCircle, SegmentClass::Rhumb] {
            let query = LocationOnPath::on_path(off, &path).segments(segments);
            assert_eq!(query.execute(), None);
            assert!(query.tolerance(1_001.0).is_on());
        }
    }

    #[test]
    fn closing_segment_only_counts_for_edges() {
        // Midpoint of the closing segment (10,10) -> (0,0).
        let closing_mid = interpolate(&p(10.0, 10.0), &p(0.0, 0.0), 0.5);
        assert_eq!(LocationOnPath::on_path(closing_mid, &path()).execute(), None);
        assert_eq!(LocationOnPath::on_edge(closing_mid, &path()).execute(), Some(0));
    }

    #[test]
    fn point_beyond_segment_end_is_rejected() {
        // On the same great circle as the first segment but past its end.
        let beyond = p(0.0, 20.0);
        let path = path();
        let query = LocationOnPath::on_path(beyond, &path).tolerance(1.0);
        assert_eq!(query.execute(), None);
    }

    #[test]
    fn long_segment_uses_along_track_test() {
        // A 150-degree equatorial segment; its haversine length exceeds the
        // short-segment shortcut.
        let long = [p(0.0, -75.0), p(0.0, 75.0)];
        assert_eq!(LocationOnPath::on_path(p(0.0, 0.0), &long).execute(), Some(0));
        assert_eq!(LocationOnPath::on_path(p(0.0, 120.0), &long).execute(), None);
        assert_eq!(LocationOnPath::on_path(p(0.0, -150.0), &long).execute(), None);
    }

    #[test]
    fn rhumb_segment_across_antimeridian() {
        let crossing = [p(10.0, 170.0), p(10.0, -170.0)];
        let query =
            LocationOnPath::on_path(p(10.0, 180.0), &crossing).segments(SegmentClass::Rhumb);
        assert_eq!(query.execute(), Some(0));
        let far_side =
            LocationOnPath::on_path(p(10.0, 0.0), &crossing).segments(SegmentClass::Rhumb);
        assert_eq!(far_side.execute(), None);
    }

    #[test]
    fn rhumb_follows_parallel_great_circle_does_not() {
        let parallel = [p(60.0, -30.0), p(60.0, 30.0)];
        let on_parallel = p(60.0, 0.0);
        let rhumb = LocationOnPath::on_path(on_parallel, &parallel).segments(SegmentClass::Rhumb);
        assert!(rhumb.is_on());
        let great_circle = LocationOnPath::on_path(on_parallel, &parallel).tolerance(1_000.0);
        assert!(!great_circle.is_on());
    }
}
