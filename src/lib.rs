//! Spherical-Earth geometry for geographic points, paths, and polygons.
//!
//! Layers, leaves first: [`math`] holds scalar trigonometric primitives,
//! [`spherical`] computes headings, distances, offsets, and areas, and
//! [`operations`] and [`codec`] analyse and serialize whole paths. Every
//! function is pure.

pub mod codec;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod spherical;

pub use error::{GeolocError, Result};
pub use geometry::{GeoPoint, LocationReading, SegmentClass};
