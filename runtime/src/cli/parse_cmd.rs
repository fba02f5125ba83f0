//! `gmaps-locate parse` — show what the extractors see, offline.

use crate::cli::output::{self, Styled};
use crate::extraction::{extract_address, find_coordinate, Coordinate};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    url: &'a str,
    coordinate: Option<Coordinate>,
    pattern: Option<&'static str>,
    address: Option<String>,
}

pub fn run(url: &str) -> Result<()> {
    let found = find_coordinate(url);
    let report = ParseReport {
        url,
        coordinate: found.map(|m| m.coordinate),
        pattern: found.map(|m| m.pattern),
        address: extract_address(url),
    };

    if output::is_json() {
        output::print_json_line(&report);
        return Ok(());
    }

    let s = Styled::new();
    match (&report.coordinate, &report.address) {
        (Some(c), _) => output::print_row(
            s.ok_sym(),
            &s.bold("Coordinate"),
            &format!(
                "{} {}",
                s.cyan(&c.to_string()),
                s.dim(&format!("[{}]", report.pattern.unwrap_or_default()))
            ),
        ),
        (None, Some(a)) if !a.is_empty() => output::print_row(s.ok_sym(), &s.bold("Address"), a),
        _ => output::print_row(s.warn_sym(), &s.bold("Nothing found"), url),
    }
    Ok(())
}
