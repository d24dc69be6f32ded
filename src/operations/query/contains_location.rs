use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{GeoPoint, SegmentClass};
use crate::math::{mercator, wrap};

/// Tests whether a point lies inside a polygon on the sphere.
///
/// The polygon is always treated as closed, whether or not the last vertex
/// repeats the first. "Inside" is the region not containing the South Pole,
/// so the South Pole itself is never inside. A point equal to a vertex is
/// always inside.
pub struct ContainsLocation<'a, P> {
    point: GeoPoint,
    polygon: &'a [P],
    segments: SegmentClass,
}

impl<'a, P: AsRef<GeoPoint>> ContainsLocation<'a, P> {
    /// Creates a new `ContainsLocation` query over great-circle edges.
    #[must_use]
    pub fn new(point: GeoPoint, polygon: &'a [P]) -> Self {
        Self {
            point,
            polygon,
            segments: SegmentClass::GreatCircle,
        }
    }

    /// Selects how the polygon's vertices are joined.
    #[must_use]
    pub fn segments(mut self, segments: SegmentClass) -> Self {
        self.segments = segments;
        self
    }

    /// Executes the query. An empty polygon contains nothing.
    ///
    /// Counts the edges crossed by the meridian arc running from the point
    /// down to the South Pole; the point is inside iff the count is odd.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> bool {
        let Some(last) = self.polygon.last() else {
            return false;
        };
        let (lat3, lng3) = self.point.radians();
        let (mut lat1, mut lng1) = last.as_ref().radians();
        let mut crossings = 0_usize;
        for vertex in self.polygon {
            let d_lng3 = wrap(lng3 - lng1, -PI, PI);
            if lat3 == lat1 && d_lng3 == 0.0 {
                tracing::trace!(point = %self.point, "point coincides with a polygon vertex");
                return true;
            }
            let (lat2, lng2) = vertex.as_ref().radians();
            // Longitudes are offset by -lng1 so the edge starts at longitude 0.
            let edge = OffsetEdge {
                lat1,
                lat2,
                lng2: wrap(lng2 - lng1, -PI, PI),
            };
            if edge.crosses_meridian_below(lat3, d_lng3, self.segments) {
                crossings += 1;
            }
            lat1 = lat2;
            lng1 = lng2;
        }
        crossings % 2 == 1
    }
}

/// An edge from `(lat1, 0)` to `(lat2, lng2)`, in radians.
#[derive(Clone, Copy)]
struct OffsetEdge {
    lat1: f64,
    lat2: f64,
    lng2: f64,
}

impl OffsetEdge {
    /// Whether the meridian segment from `(lat3, lng3)` down to the South
    /// Pole crosses this edge.
    fn crosses_meridian_below(&self, lat3: f64, lng3: f64, segments: SegmentClass) -> bool {
        let Self { lat1, lat2, lng2 } = *self;
        // Both ends on the same side of lng3.
        if (lng3 >= 0.0 && lng3 >= lng2) || (lng3 < 0.0 && lng3 < lng2) {
            return false;
        }
        // The point is the South Pole.
        if lat3 <= -FRAC_PI_2 {
            return false;
        }
        // Either edge end is a pole.
        if lat1 <= -FRAC_PI_2 || lat2 <= -FRAC_PI_2 || lat1 >= FRAC_PI_2 || lat2 >= FRAC_PI_2 {
            return false;
        }
        // The edge spans half the globe; its direction is ambiguous.
        if lng2 <= -PI {
            return false;
        }
        let linear_lat = (lat1 * (lng2 - lng3) + lat2 * lng3) / lng2;
        // Northern hemisphere and point under the lat-lng line.
        if lat1 >= 0.0 && lat2 >= 0.0 && lat3 < linear_lat {
            return false;
        }
        // Southern hemisphere and point above the lat-lng line.
        if lat1 <= 0.0 && lat2 <= 0.0 && lat3 >= linear_lat {
            return true;
        }
        if lat3 >= FRAC_PI_2 {
            return true;
        }
        // Compare against the edge's latitude at lng3 through a strictly
        // increasing function of latitude.
        match segments {
            SegmentClass::GreatCircle => lat3.tan() >= self.tan_lat_great_circle(lng3),
            SegmentClass::Rhumb => mercator(lat3) >= self.mercator_lat_rhumb(lng3),
        }
    }

    /// `tan(latitude)` of the great circle through the edge at `lng3`.
    fn tan_lat_great_circle(&self, lng3: f64) -> f64 {
        (self.lat1.tan() * (self.lng2 - lng3).sin() + self.lat2.tan() * lng3.sin())
            / self.lng2.sin()
    }

    /// Mercator Y of the rhumb line through the edge at `lng3`.
    fn mercator_lat_rhumb(&self, lng3: f64) -> f64 {
        (mercator(self.lat1) * (self.lng2 - lng3) + mercator(self.lat2) * lng3) / self.lng2
    }
}
