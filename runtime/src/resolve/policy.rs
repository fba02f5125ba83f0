//! Coordinate-before-address resolution of a single URL.

use crate::extraction::{extract_address, extract_coordinate, Coordinate};
use crate::host::SearchQuery;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const RESULT_TITLE: &str = "Google Maps Coordinates";

/// Which URL a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "Direct URL")]
    Direct,
    #[serde(rename = "Expanded URL")]
    Expanded,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::Direct => "Direct URL",
            Provenance::Expanded => "Expanded URL",
        })
    }
}

/// A jump-to-location entry for the host result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub title: String,
    pub description: String,
    pub position: Coordinate,
    pub provenance: Provenance,
    pub icon: Option<String>,
}

impl LocationResult {
    pub fn new(position: Coordinate, provenance: Provenance) -> Self {
        Self {
            title: RESULT_TITLE.to_string(),
            description: format!("Jump to: {position} ({provenance})"),
            position,
            provenance,
            icon: None,
        }
    }
}

/// Receives addresses that should be searched as plain text by the host.
pub trait AddressForwarder: Send + Sync {
    fn forward(&self, address: &str);
}

/// Outcome of resolving one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Located(Coordinate),
    Forwarded(String),
    Unresolved,
}

/// Resolve `url`: add a result for a coordinate, otherwise forward a
/// non-empty address, otherwise do nothing.
pub fn resolve(
    url: &str,
    provenance: Provenance,
    query: &dyn SearchQuery,
    forwarder: &dyn AddressForwarder,
) -> Resolution {
    if let Some(position) = extract_coordinate(url) {
        debug!(url, %provenance, %position, "coordinate found");
        query.add_result(LocationResult::new(position, provenance));
        return Resolution::Located(position);
    }

    match extract_address(url) {
        Some(address) if !address.is_empty() => {
            debug!(url, %provenance, address, "address found");
            forwarder.forward(&address);
            Resolution::Forwarded(address)
        }
        _ => {
            debug!(url, %provenance, "nothing to resolve");
            Resolution::Unresolved
        }
    }
}
