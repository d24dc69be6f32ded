//! Headings, distances, offsets, interpolation, lengths, and areas on the
//! spherical Earth. Inputs and outputs are in degrees and meters.

pub mod area;
pub mod distance;
pub mod heading;
pub mod interpolate;

pub use area::{compute_area, compute_signed_area, compute_signed_area_with_radius};
pub use distance::{compute_angle_between, compute_distance_between, compute_length};
pub use heading::{compute_heading, compute_offset, compute_offset_origin};
pub use interpolate::interpolate;
