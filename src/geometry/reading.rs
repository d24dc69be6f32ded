use crate::math::round_half_up;

use super::GeoPoint;

/// Decimal places kept for coordinates and altitude of a rounded reading.
const COORDINATE_SCALE: i32 = 6;

/// A location fix as reported by a positioning provider.
///
/// The geographic position is held by value in [`point`](Self::point); the
/// remaining fields are carried for consumers and take no part in any
/// geometric computation. Readings have no equality of their own: compare
/// their points.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReading {
    /// Position of the fix.
    pub point: GeoPoint,
    /// Name of the provider that produced the fix, e.g. `"gps"`.
    pub provider: String,
    /// Altitude above the reference ellipsoid, in meters.
    pub altitude: f64,
    /// Horizontal accuracy radius, in meters.
    pub accuracy: f32,
    /// Ground speed, in meters per second.
    pub speed: f32,
    /// Direction of travel, in degrees clockwise from north.
    pub bearing: f32,
    /// Time of the fix, in milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Number of satellites used for the fix.
    pub satellites: u32,
}

impl LocationReading {
    /// Creates a reading with zeroed auxiliary measurements.
    #[must_use]
    pub fn new(provider: impl Into<String>, point: GeoPoint, timestamp_ms: i64) -> Self {
        Self {
            point,
            provider: provider.into(),
            altitude: 0.0,
            accuracy: 0.0,
            speed: 0.0,
            bearing: 0.0,
            timestamp_ms,
            satellites: 0,
        }
    }

    /// Sets the altitude in meters.
    #[must_use]
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Sets the accuracy radius in meters.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f32) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the ground speed in meters per second.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the bearing in degrees.
    #[must_use]
    pub fn with_bearing(mut self, bearing: f32) -> Self {
        self.bearing = bearing;
        self
    }

    /// Sets the satellite count.
    #[must_use]
    pub fn with_satellites(mut self, satellites: u32) -> Self {
        self.satellites = satellites;
        self
    }

    /// Returns the reading with latitude, longitude, and altitude rounded
    /// half-up to six decimal places, the precision providers report.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.point = GeoPoint::new(
            round_half_up(self.point.latitude(), COORDINATE_SCALE),
            round_half_up(self.point.longitude(), COORDINATE_SCALE),
        );
        self.altitude = round_half_up(self.altitude, COORDINATE_SCALE);
        self
    }
}

impl AsRef<GeoPoint> for LocationReading {
    fn as_ref(&self) -> &GeoPoint {
        &self.point
    }
}

impl From<&LocationReading> for GeoPoint {
    fn from(reading: &LocationReading) -> Self {
        reading.point
    }
}
