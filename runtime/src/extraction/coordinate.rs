//! Latitude/longitude extraction.

use crate::text::{decode_or_raw, normalize_width};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Signed decimal number with a mandatory fractional part, ASCII digits only.
const NUM: &str = r"(-?[0-9]+\.[0-9]+)";

/// Ordered coordinate patterns. Earlier entries are more specific markers and
/// must stay ahead of the looser ones: one URL often carries several.
static COORDINATE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("data-marker", format!(r"!3d{NUM}!4d{NUM}")),
        ("query", format!(r"[?&]q={NUM},{NUM}")),
        ("search-path", format!(r"search/{NUM},\s*{NUM}")),
        ("ll-param", format!(r"[?&]ll={NUM},{NUM}")),
        ("at-marker", format!(r"@{NUM},{NUM}")),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(&pattern).unwrap()))
    .collect()
});

/// A WGS84 position.
///
/// Latitude is always within [-90, 90]. Longitude is taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite values and out-of-range latitude.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 {
            Some(Self { lat, lng })
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A coordinate together with the name of the pattern that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMatch {
    pub coordinate: Coordinate,
    pub pattern: &'static str,
}

/// Find the first coordinate pattern that yields a valid position.
///
/// Only the first occurrence of each pattern is considered. A rejected
/// occurrence falls through to the next pattern, not to a later occurrence.
pub fn find_coordinate(url: &str) -> Option<CoordinateMatch> {
    let decoded = normalize_width(&decode_or_raw(url));

    COORDINATE_PATTERNS.iter().find_map(|(name, re)| {
        let caps = re.captures(&decoded)?;
        let lat = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let lng = caps.get(2)?.as_str().parse::<f64>().ok()?;
        Coordinate::new(lat, lng).map(|coordinate| CoordinateMatch {
            coordinate,
            pattern: *name,
        })
    })
}

/// Extract a coordinate from a Google Maps URL.
pub fn extract_coordinate(url: &str) -> Option<Coordinate> {
    find_coordinate(url).map(|m| m.coordinate)
}
