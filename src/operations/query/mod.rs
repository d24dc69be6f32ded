mod contains_location;
mod location_on_path;

pub use contains_location::ContainsLocation;
pub use location_on_path::LocationOnPath;
