mod simplify;

pub use simplify::{distance_to_line, is_closed_polygon, Simplify};
