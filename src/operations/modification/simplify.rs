use crate::error::{OperationError, Result};
use crate::geometry::GeoPoint;
use crate::spherical::compute_distance_between;

/// Shift applied to the last vertex of a closed polygon, in degrees, so that
/// the first and last vertices no longer coincide during decimation.
const CLOSED_POLYGON_OFFSET: f64 = 1e-11;

/// Simplifies a polyline or polygon with the Douglas-Peucker algorithm.
///
/// A polygon must be passed closed (first vertex equal to the last) to be
/// simplified as a polygon. The first and last vertices are always kept.
/// Runs in `O(n^2)` in the worst case.
pub struct Simplify<'a, P> {
    path: &'a [P],
    tolerance: f64,
}

impl<'a, P: AsRef<GeoPoint> + Clone> Simplify<'a, P> {
    /// Creates a new `Simplify` operation with `tolerance` in meters.
    #[must_use]
    pub fn new(path: &'a [P], tolerance: f64) -> Self {
        Self { path, tolerance }
    }

    /// Executes the simplification, returning the retained vertices in order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the path is empty or the
    /// tolerance is not strictly positive.
    pub fn execute(&self) -> Result<Vec<P>> {
        let n = self.path.len();
        if n == 0 {
            return Err(
                OperationError::InvalidInput("path must have at least 1 point".into()).into(),
            );
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tolerance must be greater than zero, got {}",
                self.tolerance
            ))
            .into());
        }

        let mut vertices: Vec<GeoPoint> = self.path.iter().map(|p| *p.as_ref()).collect();
        let closed = is_closed_polygon(&vertices);
        if closed {
            tracing::debug!(points = n, "simplifying closed polygon");
            let last = vertices[n - 1];
            vertices[n - 1] = GeoPoint::new(
                last.latitude() + CLOSED_POLYGON_OFFSET,
                last.longitude() + CLOSED_POLYGON_OFFSET,
            );
        }

        let keep = self.decimate(&vertices);
        let simplified: Vec<P> = self
            .path
            .iter()
            .zip(&keep)
            .filter(|(_, kept)| **kept)
            .map(|(point, _)| point.clone())
            .collect();
        tracing::debug!(
            input = n,
            output = simplified.len(),
            tolerance = self.tolerance,
            "simplified path"
        );
        Ok(simplified)
    }

    /// Marks the vertices to keep. Ranges still to be examined live on an
    /// explicit stack rather than the call stack.
    fn decimate(&self, vertices: &[GeoPoint]) -> Vec<bool> {
        let n = vertices.len();
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;
        if n <= 2 {
            return keep;
        }

        let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];
        while let Some((lo, hi)) = stack.pop() {
            let mut max_dist = 0.0;
            let mut max_idx = lo;
            for idx in lo + 1..hi {
                let dist = distance_to_line(&vertices[idx], &vertices[lo], &vertices[hi]);
                if dist > max_dist {
                    max_dist = dist;
                    max_idx = idx;
                }
            }
            if max_dist > self.tolerance {
                tracing::trace!(lo, hi, split = max_idx, distance = max_dist, "splitting range");
                keep[max_idx] = true;
                stack.push((lo, max_idx));
                stack.push((max_idx, hi));
            }
        }
        keep
    }
}

/// Returns `true` if `path` is non-empty and its first and last vertices are
/// equal.
#[must_use]
pub fn is_closed_polygon<P: AsRef<GeoPoint>>(path: &[P]) -> bool {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) => first.as_ref() == last.as_ref(),
        _ => false,
    }
}

/// Returns the distance in meters from `p` to the segment `start -> end`.
///
/// The foot of the perpendicular is found by projecting in
/// latitude/longitude space; when it falls outside the segment the distance
/// to the nearer endpoint is returned.
#[must_use]
pub fn distance_to_line(p: &GeoPoint, start: &GeoPoint, end: &GeoPoint) -> f64 {
    if start == end {
        return compute_distance_between(end, p);
    }
    let (s0_lat, s0_lng) = p.radians();
    let (s1_lat, s1_lng) = start.radians();
    let (s2_lat, s2_lng) = end.radians();
    let d_lat = s2_lat - s1_lat;
    let d_lng = s2_lng - s1_lng;
    let u = ((s0_lat - s1_lat) * d_lat + (s0_lng - s1_lng) * d_lng)
        / (d_lat * d_lat + d_lng * d_lng);
    if u <= 0.0 {
        return compute_distance_between(p, start);
    }
    if u >= 1.0 {
        return compute_distance_between(p, end);
    }
    let foot = GeoPoint::new(
        start.latitude() + u * (end.latitude() - start.latitude()),
        start.longitude() + u * (end.longitude() - start.longitude()),
    );
    compute_distance_between(p, &foot)
}
