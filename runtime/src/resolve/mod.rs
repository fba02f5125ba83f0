//! Deciding what a search term turns into: a map result, a forwarded
//! address search, or nothing.

pub mod policy;
pub mod search;

pub use policy::{resolve, AddressForwarder, LocationResult, Provenance, Resolution};
pub use search::{is_url_term, SearchHandler, SearchTask};
