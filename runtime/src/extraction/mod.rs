//! Coordinate and address extraction from Google Maps URLs.
//!
//! Both extractors decode the URL first and then try an ordered list of
//! patterns; the first accepted match wins. Coordinates always take
//! precedence over address text.

pub mod address;
pub mod coordinate;

pub use address::extract_address;
pub use coordinate::{extract_coordinate, find_coordinate, Coordinate, CoordinateMatch};
