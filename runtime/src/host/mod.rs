//! Boundary to the host map application.
//!
//! The host exposes its search box, result list and map view through the
//! traits below. Any capability the host lacks is reported as
//! [`HostError::Unsupported`], which lets callers switch to a lower-level
//! fallback instead of failing.

pub mod forward;
pub mod selection;

use crate::extraction::Coordinate;
use crate::resolve::LocationResult;
use thiserror::Error;

pub use forward::{ForwardedSearch, SearchStrategy};
pub use selection::{select_result, PaneSwitch, JUMP_ZOOM};

/// Errors raised by host calls.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host does not provide this capability.
    #[error("host does not provide {0}")]
    Unsupported(&'static str),
    /// The capability exists but the call failed.
    #[error("host call {call} failed: {reason}")]
    Failed { call: &'static str, reason: String },
}

/// A single search submission as seen by the host.
///
/// Results may be appended from the synchronous direct pass and from the
/// asynchronous expansion pass, in either order.
pub trait SearchQuery: Send + Sync {
    fn term(&self) -> &str;
    fn add_result(&self, result: LocationResult);
}

/// The host's free-text search box.
pub trait SearchInput: Send + Sync {
    /// Put `term` into the search box.
    fn set_value(&self, term: &str) -> Result<(), HostError>;

    /// Run the host's own search function.
    fn native_search(&self, _term: &str) -> Result<(), HostError> {
        Err(HostError::Unsupported("native search"))
    }

    /// Dispatch an Enter keypress on the search box.
    fn press_enter(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("key events"))
    }

    /// Submit the form that encloses the search box, if any.
    fn submit_form(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("search form"))
    }
}

/// The host's map view.
///
/// Only `set_view` and `is_constrained_display` are required; the pane and
/// DOM-level methods default to unsupported.
pub trait MapView: Send + Sync {
    fn set_view(&self, position: Coordinate, zoom: u8) -> Result<(), HostError>;

    /// True on phone-sized layouts where the map shares the screen with other panes.
    fn is_constrained_display(&self) -> bool;

    /// Switch the active pane with the host's own view switcher.
    fn show_pane(&self, _pane: &str) -> Result<(), HostError> {
        Err(HostError::Unsupported("view switcher"))
    }

    fn hide_scroll_wrapper(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("scroll wrapper"))
    }

    fn show_status_bar(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("status bar"))
    }

    fn reveal_map(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("map visibility"))
    }

    fn close_dialogs(&self) -> Result<(), HostError> {
        Err(HostError::Unsupported("dialogs"))
    }
}
