//! gmaps-locate — turn Google Maps URLs into map positions or address searches.
//!
//! A pasted URL is decoded, folded to half-width text and matched against
//! ordered coordinate patterns. When no coordinate is present, the `q=` or
//! `/search/` text is cleaned into an address and handed back to the host's
//! own search. Short links are expanded with a HEAD request and resolved a
//! second time.

pub mod acquisition;
pub mod cli;
pub mod config;
pub mod extraction;
pub mod host;
pub mod resolve;
pub mod text;

pub use config::LocatorConfig;
pub use extraction::{extract_address, extract_coordinate, Coordinate};
pub use resolve::{LocationResult, Provenance, SearchHandler};
pub use text::normalize_width;
