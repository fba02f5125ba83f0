//! Text clean-up shared by the extractors: percent-decoding and
//! full-width to half-width folding.

pub mod decode;
pub mod normalize;

pub use decode::decode_or_raw;
pub use normalize::normalize_width;
