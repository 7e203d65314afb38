//! Helper functions shared by the tray and the configure dialog.

use crate::events::DimEvent;
use crate::model::DimMode;
use crate::platform::windows::ui::tray;

use super::state::STATE;

/// Send an event to the controller's worker.
pub fn publish_event(event: DimEvent) {
    let publisher = STATE.with(|s| s.borrow().publisher.clone());
    let delivered = publisher.map(|p| p.publish(event.clone())).unwrap_or(false);
    if !delivered {
        tracing::warn!(event = event.description(), "event dropped, worker not running");
    }
}

/// Switch dimming on or off and reflect it in the tray.
pub fn set_mode(mode: DimMode) {
    STATE.with(|s| s.borrow_mut().mode = mode);
    publish_event(match mode {
        DimMode::Enabled => DimEvent::EnableToggled,
        DimMode::Disabled => DimEvent::DisableToggled,
    });
    tray::update_tray_state(mode);
}

/// Flip between enabled and disabled.
pub fn toggle_mode() {
    let next = match STATE.with(|s| s.borrow().mode) {
        DimMode::Enabled => DimMode::Disabled,
        DimMode::Disabled => DimMode::Enabled,
    };
    set_mode(next);
}
