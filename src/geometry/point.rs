use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, Result};
use crate::math::{clamp, wrap};

/// A latitude/longitude pair in degrees on the spherical Earth.
///
/// Equality and hashing consider only the two coordinates. `-0.0` and `0.0`
/// compare equal; otherwise coordinates are compared bit for bit so that
/// `Eq` and `Hash` agree.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from raw degrees without validation or normalization.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a point, validating the latitude and wrapping the longitude
    /// into `[-180, 180)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if either coordinate is NaN or
    /// infinite, and `GeometryError::ParameterOutOfRange` if the latitude is
    /// outside `[-90, 90]`.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "latitude",
                value: latitude,
            }
            .into());
        }
        if !longitude.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "longitude",
                value: longitude,
            }
            .into());
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "latitude",
                value: latitude,
                min: -90.0,
                max: 90.0,
            }
            .into());
        }
        Ok(Self::new(latitude, wrap(longitude, -180.0, 180.0)))
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)` converted to radians.
    #[must_use]
    pub fn radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Returns a copy with latitude clamped to `[-90, 90]` and longitude
    /// wrapped into `[-180, 180)`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            clamp(self.latitude, -90.0, 90.0),
            wrap(self.longitude, -180.0, 180.0),
        )
    }

    /// Returns `false` when either coordinate is exactly zero, which location
    /// producers report as a placeholder before a fix is acquired.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_valid_fix(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }

    /// Great-circle distance to `other`, in meters.
    #[must_use]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::spherical::compute_distance_between(self, other)
    }

    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.latitude), canonical_bits(self.longitude))
    }
}

/// Folds `-0.0` onto `0.0` before taking the bit pattern.
fn canonical_bits(x: f64) -> u64 {
    (x + 0.0).to_bits()
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl AsRef<GeoPoint> for GeoPoint {
    fn as_ref(&self) -> &GeoPoint {
        self
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeolocError;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_signed_zero() {
        assert_eq!(GeoPoint::new(0.0, 10.0), GeoPoint::new(-0.0, 10.0));
        let set: HashSet<GeoPoint> = [GeoPoint::new(0.0, -0.0), GeoPoint::new(-0.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equality_distinguishes_coordinates() {
        assert_ne!(GeoPoint::new(1.0, 2.0), GeoPoint::new(2.0, 1.0));
        assert_ne!(GeoPoint::new(1.0, 2.0), GeoPoint::new(1.0, 2.000_000_1));
    }

    #[test]
    fn try_new_wraps_longitude() {
        let p = GeoPoint::try_new(10.0, 190.0).unwrap();
        assert_abs_diff_eq!(p.longitude(), -170.0, epsilon = 1e-12);
        let q = GeoPoint::try_new(10.0, 180.0).unwrap();
        assert_abs_diff_eq!(q.longitude(), -180.0);
    }

    #[test]
    fn try_new_rejects_bad_latitude() {
        let err = GeoPoint::try_new(91.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GeolocError::Geometry(GeometryError::ParameterOutOfRange { .. })
        ));
        let err = GeoPoint::try_new(f64::NAN, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GeolocError::Geometry(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn normalized_clamps_and_wraps() {
        let p = GeoPoint::new(95.0, -200.0).normalized();
        assert_abs_diff_eq!(p.latitude(), 90.0);
        assert_abs_diff_eq!(p.longitude(), 160.0, epsilon = 1e-12);
    }

    #[test]
    fn placeholder_is_not_a_valid_fix() {
        assert!(!GeoPoint::new(0.0, 0.0).is_valid_fix());
        assert!(!GeoPoint::new(0.0, 12.0).is_valid_fix());
        assert!(GeoPoint::new(31.2, 121.5).is_valid_fix());
    }

    #[test]
    fn display_shows_both_coordinates() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.5, -2.25)");
    }
}
