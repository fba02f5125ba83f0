//! `gmaps-locate resolve` — run a URL through the full search pipeline.

use crate::acquisition::{HttpExpander, NoopExpander, RedirectExpander};
use crate::cli::console_host::ConsoleHost;
use crate::cli::output::{self, Styled};
use crate::config::LocatorConfig;
use crate::host::ForwardedSearch;
use crate::resolve::SearchHandler;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

/// Resolve `url` as if it had been typed into the host search box.
pub async fn run(url: &str, expand: bool, config: &LocatorConfig) -> Result<()> {
    let s = Styled::new();
    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
    }

    let host = Arc::new(ConsoleHost::new(url));
    let forwarder = Arc::new(ForwardedSearch::new(host.clone(), config.forward_delay()));
    let expander: Arc<dyn RedirectExpander> = if expand {
        Arc::new(HttpExpander::new(config).context("failed to build HTTP client")?)
    } else {
        Arc::new(NoopExpander)
    };

    let handler =
        SearchHandler::new(expander, forwarder.clone()).with_cancel_stale(config.cancel_stale);

    let Some(task) = handler.handle_search(host.clone()) else {
        if !output::is_quiet() && !output::is_json() {
            eprintln!("  {} Not a URL; nothing to do.", s.warn_sym());
        }
        return Ok(());
    };
    debug!(direct = ?task.direct, "direct pass finished");

    let expanded = task.expansion.await.context("expansion task failed")?;
    debug!(?expanded, "expansion pass finished");
    forwarder.drain().await;

    if host.event_count() == 0 && !output::is_quiet() && !output::is_json() {
        eprintln!("  {} No coordinate or address found.", s.warn_sym());
    }
    Ok(())
}
