pub mod point;
pub mod reading;
pub mod segment;

pub use point::GeoPoint;
pub use reading::LocationReading;
pub use segment::SegmentClass;
