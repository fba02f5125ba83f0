//! A terminal stand-in for the host map application.
//!
//! Results and forwarded searches are printed instead of shown in a UI.

use crate::cli::output::{self, Styled};
use crate::host::{HostError, SearchInput, SearchQuery};
use crate::resolve::LocationResult;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Events written in `--json` mode, one per line.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ConsoleEvent<'a> {
    Result(&'a LocationResult),
    Search { term: &'a str },
}

/// Prints what a real host would display or execute.
pub struct ConsoleHost {
    term: String,
    styled: Styled,
    events: AtomicUsize,
}

impl ConsoleHost {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            styled: Styled::new(),
            events: AtomicUsize::new(0),
        }
    }

    /// Number of results and searches printed so far.
    pub fn event_count(&self) -> usize {
        self.events.load(Ordering::SeqCst)
    }

    fn emit(&self, event: ConsoleEvent<'_>) {
        self.events.fetch_add(1, Ordering::SeqCst);
        if output::is_json() {
            output::print_json_line(&event);
            return;
        }

        let s = &self.styled;
        match event {
            ConsoleEvent::Result(result) => output::print_row(
                s.ok_sym(),
                &s.bold(&result.title),
                &format!(
                    "{} {}",
                    s.cyan(&result.position.to_string()),
                    s.dim(&format!("({})", result.provenance))
                ),
            ),
            ConsoleEvent::Search { term } => {
                output::print_row(s.forward_sym(), &s.bold("Address search"), term)
            }
        }
    }
}

impl SearchQuery for ConsoleHost {
    fn term(&self) -> &str {
        &self.term
    }

    fn add_result(&self, result: LocationResult) {
        self.emit(ConsoleEvent::Result(&result));
    }
}

impl SearchInput for ConsoleHost {
    fn set_value(&self, _term: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn native_search(&self, term: &str) -> Result<(), HostError> {
        self.emit(ConsoleEvent::Search { term });
        Ok(())
    }
}
