//! Shared CLI output formatting with colors, symbols, and JSON events.

use serde::Serialize;
use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    // Respect --no-color flag via our global flag
    if std::env::var("GMAPS_LOCATE_NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ANSI color codes
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    /// Blue arrow for forwarded searches.
    pub fn forward_sym(&self) -> &str {
        if self.use_color {
            "\x1b[34m\u{2192}\x1b[0m"
        } else {
            "->"
        }
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Print a branded header to stderr.
pub fn print_header(s: &Styled) {
    eprintln!(
        "  {} {}",
        s.bold("gmaps-locate"),
        s.dim(&format!("v{}", env!("CARGO_PKG_VERSION")))
    );
    eprintln!();
}

/// Print a result line with symbol and label/value.
pub fn print_row(symbol: &str, label: &str, value: &str) {
    println!("    {symbol} {label:<16} {value}");
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var("GMAPS_LOCATE_QUIET").is_ok()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var("GMAPS_LOCATE_JSON").is_ok()
}

/// Print one JSON event per line to stdout.
pub fn print_json_line<T: Serialize>(value: &T) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{s}");
    }
}
