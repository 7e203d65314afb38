//! Events consumed by the dim controller.
//!
//! Producers are the focus hook, the tray menu and the configure dialog.
//! This module is pure Rust with no FFI dependencies.

use crate::engine::WindowHandle;
use crate::model::DimConfig;

/// Requests handled, in order, by the controller's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimEvent {
    // === Tray ===
    /// "Dim" selected: enable and dim around the foreground window.
    EnableToggled,

    /// "Undim" selected: disable and restore every window.
    DisableToggled,

    // === OS ===
    /// Input focus moved to another top-level window.
    FocusChanged(WindowHandle),

    // === Configure dialog ===
    /// New parameters, either a live preview or the confirmed value.
    ConfigUpdated(DimConfig),

    // === Lifecycle ===
    /// Restore every window and stop the event loop.
    Shutdown,
}

impl DimEvent {
    /// True for events that come from user action rather than the OS.
    pub fn is_user_action(&self) -> bool {
        !matches!(self, DimEvent::FocusChanged(_))
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            DimEvent::EnableToggled => "Enable dimming",
            DimEvent::DisableToggled => "Disable dimming",
            DimEvent::FocusChanged(_) => "Focus changed",
            DimEvent::ConfigUpdated(_) => "Config updated",
            DimEvent::Shutdown => "Shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_change_is_not_a_user_action() {
        assert!(!DimEvent::FocusChanged(WindowHandle::from_raw(1)).is_user_action());
        assert!(DimEvent::EnableToggled.is_user_action());
        assert!(DimEvent::ConfigUpdated(DimConfig::default()).is_user_action());
        assert!(DimEvent::Shutdown.is_user_action());
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            DimEvent::EnableToggled,
            DimEvent::DisableToggled,
            DimEvent::FocusChanged(WindowHandle::from_raw(7)),
            DimEvent::ConfigUpdated(DimConfig::default()),
            DimEvent::Shutdown,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
