//! Forwarding an extracted address to the host's own text search.
//!
//! The value is written into the search box right away; execution is
//! scheduled a few milliseconds later so it does not collide with UI
//! updates triggered by the same search event.

use super::{HostError, SearchInput};
use crate::resolve::AddressForwarder;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// How a forwarded search was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// The host's native search function ran.
    Native,
    /// An Enter keypress was simulated.
    KeyEvents { form_submitted: bool },
    /// Nothing could be triggered.
    Unavailable,
}

/// Schedules address searches on the host search box.
pub struct ForwardedSearch {
    input: Arc<dyn SearchInput>,
    delay: Duration,
    tracker: TaskTracker,
}

impl ForwardedSearch {
    pub fn new(input: Arc<dyn SearchInput>, delay: Duration) -> Self {
        Self {
            input,
            delay,
            tracker: TaskTracker::new(),
        }
    }

    /// Fill the search box and schedule execution after the configured delay.
    ///
    /// Must be called from within a Tokio runtime. Returns `None` for an
    /// empty term.
    pub fn schedule(&self, term: &str) -> Option<JoinHandle<SearchStrategy>> {
        if term.is_empty() {
            return None;
        }
        info!(term, "forwarding address to host search");

        match self.input.set_value(term) {
            Ok(()) => {}
            Err(HostError::Unsupported(what)) => debug!("no search box: {what}"),
            Err(e) => warn!("failed to fill search box: {e}"),
        }

        let input = Arc::clone(&self.input);
        let delay = self.delay;
        let term = term.to_string();
        Some(self.tracker.spawn(async move {
            tokio::time::sleep(delay).await;
            execute(input.as_ref(), &term)
        }))
    }

    /// Wait until every search scheduled so far has executed.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

impl AddressForwarder for ForwardedSearch {
    fn forward(&self, address: &str) {
        let _ = self.schedule(address);
    }
}

/// Run the search with the best capability the host offers.
fn execute(input: &dyn SearchInput, term: &str) -> SearchStrategy {
    match input.native_search(term) {
        Ok(()) => {
            debug!("host native search executed");
            return SearchStrategy::Native;
        }
        Err(HostError::Unsupported(_)) => {}
        Err(e) => {
            warn!("native search failed: {e}");
            return SearchStrategy::Unavailable;
        }
    }

    match input.press_enter() {
        Ok(()) => debug!("simulated Enter on search box"),
        Err(HostError::Unsupported(what)) => {
            debug!("cannot trigger search without {what}");
            return SearchStrategy::Unavailable;
        }
        Err(e) => warn!("Enter simulation failed: {e}"),
    }

    let form_submitted = match input.submit_form() {
        Ok(()) => true,
        Err(HostError::Unsupported(_)) => false,
        Err(e) => {
            warn!("form submit failed: {e}");
            false
        }
    };

    SearchStrategy::KeyEvents { form_submitted }
}
