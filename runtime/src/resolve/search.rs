//! Entry point for host search submissions.
//!
//! A URL term is resolved twice: once as typed and once after redirect
//! expansion. The expansion pass runs on its own task and may finish before
//! or after the host renders the direct result, or never.

use super::policy::{resolve, AddressForwarder, Provenance, Resolution};
use crate::acquisition::RedirectExpander;
use crate::host::SearchQuery;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// True for terms that start with an `http://` or `https://` scheme.
///
/// The scheme check is case-sensitive.
pub fn is_url_term(term: &str) -> bool {
    term.starts_with("https://") || term.starts_with("http://")
}

/// Handle to an in-flight search.
pub struct SearchTask {
    /// Outcome of the direct pass.
    pub direct: Resolution,
    /// The expansion pass. Yields `None` when the expanded URL was the same
    /// as the term or the search was cancelled.
    pub expansion: JoinHandle<Option<Resolution>>,
    /// Cancels the expansion pass.
    pub token: CancellationToken,
}

/// Turns host search submissions into results and forwarded searches.
pub struct SearchHandler {
    expander: Arc<dyn RedirectExpander>,
    forwarder: Arc<dyn AddressForwarder>,
    cancel_stale: bool,
    pending: Mutex<Option<CancellationToken>>,
}

impl SearchHandler {
    pub fn new(expander: Arc<dyn RedirectExpander>, forwarder: Arc<dyn AddressForwarder>) -> Self {
        Self {
            expander,
            forwarder,
            cancel_stale: false,
            pending: Mutex::new(None),
        }
    }

    /// Cancel the previous search's expansion whenever a new URL search starts.
    ///
    /// Off by default: a stale expansion still emits into its own query.
    pub fn with_cancel_stale(mut self, cancel_stale: bool) -> Self {
        self.cancel_stale = cancel_stale;
        self
    }

    /// Process one search submission.
    ///
    /// Returns `None` without touching the query when the term is not a URL.
    /// Must be called from within a Tokio runtime.
    pub fn handle_search(&self, query: Arc<dyn SearchQuery>) -> Option<SearchTask> {
        let term = query.term().trim().to_string();
        if term.is_empty() || !is_url_term(&term) {
            return None;
        }
        info!(term, "resolving Google Maps URL");

        let token = self.next_token();
        let direct = resolve(
            &term,
            Provenance::Direct,
            query.as_ref(),
            self.forwarder.as_ref(),
        );

        let expander = Arc::clone(&self.expander);
        let forwarder = Arc::clone(&self.forwarder);
        let cancelled = token.clone();
        let expansion = tokio::spawn(async move {
            let expanded = tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(term, "expansion cancelled");
                    return None;
                }
                url = expander.expand(&term) => url,
            };

            if expanded.is_empty() || expanded == term {
                debug!(term, "expansion produced no new URL");
                return None;
            }
            info!(term, expanded, "resolving expanded URL");
            Some(resolve(
                &expanded,
                Provenance::Expanded,
                query.as_ref(),
                forwarder.as_ref(),
            ))
        });

        Some(SearchTask {
            direct,
            expansion,
            token,
        })
    }

    fn next_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.replace(token.clone()) {
            if self.cancel_stale {
                previous.cancel();
            }
        }
        token
    }
}
