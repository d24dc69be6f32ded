pub mod haversine;
pub mod scalar;

pub use haversine::{arc_hav, hav, hav_distance, hav_from_sin, sin_from_hav, sin_sum_from_hav};
pub use scalar::{clamp, inverse_mercator, mercator, modulo, round_half_up, wrap};

/// 2D vector type, used for Mercator-plane projections.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type, used for unit-sphere positions.
pub type Vector3 = nalgebra::Vector3<f64>;

/// The earth's mean radius as defined by IUGG, in meters.
pub const EARTH_RADIUS: f64 = 6_371_009.0;

/// Default tolerance for on-edge and on-path tests, in meters.
pub const DEFAULT_TOLERANCE: f64 = 0.1;
