//! Jumping the host map to a picked result.

use super::{HostError, MapView};
use crate::resolve::LocationResult;
use tracing::{debug, warn};

/// How the map pane was brought forward on a constrained display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSwitch {
    /// Full-size layout, nothing to switch.
    NotNeeded,
    /// The host's view switcher handled it.
    ViewSwitcher,
    /// The DOM-level fallback ran, completely or not.
    Fallback { complete: bool },
}

/// Zoom level used when jumping to a picked result.
pub const JUMP_ZOOM: u8 = 17;

/// Handle the user picking `result`: centre the map on it at [`JUMP_ZOOM`] and,
/// on phone layouts, make sure the map pane is the one showing.
///
/// Returns `true` to tell the host the selection was handled. Host failures
/// are logged and never propagated.
pub fn select_result(result: &LocationResult, map: Option<&dyn MapView>) -> bool {
    let Some(map) = map else {
        debug!("no map view, ignoring selection");
        return true;
    };

    if let Err(e) = map.set_view(result.position, JUMP_ZOOM) {
        warn!(position = %result.position, "failed to move map: {e}");
    }

    let switch = bring_map_forward(map);
    debug!(?switch, "map pane switch");

    true
}

fn bring_map_forward(map: &dyn MapView) -> PaneSwitch {
    if !map.is_constrained_display() {
        return PaneSwitch::NotNeeded;
    }

    match map.show_pane("map") {
        Ok(()) => return PaneSwitch::ViewSwitcher,
        Err(HostError::Unsupported(_)) => {}
        Err(e) => debug!("view switcher failed, using fallback: {e}"),
    }

    match force_map_display(map) {
        Ok(()) => PaneSwitch::Fallback { complete: true },
        Err(e) => {
            warn!("forcing map display failed: {e}");
            PaneSwitch::Fallback { complete: false }
        }
    }
}

/// Hide the list pane and reveal the map by hand.
fn force_map_display(map: &dyn MapView) -> Result<(), HostError> {
    map.hide_scroll_wrapper()?;
    map.show_status_bar()?;
    map.reveal_map()?;
    map.close_dialogs()
}
