//! Windows runtime state management.
//!
//! Contains the UI-thread state struct and thread-local storage.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::events::EventPublisher;
use crate::model::{DimConfig, DimMode};
use crate::storage::ConfigStore;

/// State owned by the UI thread (tray, configure dialog).
///
/// The controller keeps its own authoritative copy of mode and config; the
/// fields here mirror what the UI last requested so menus and the dialog can
/// render without crossing threads.
pub struct WindowsRuntimeState {
    /// Hidden host window receiving tray and session messages.
    pub hwnd: HWND,
    /// Mode last requested from the tray.
    pub mode: DimMode,
    /// Last confirmed (saved) config; the dialog reverts to it on cancel.
    pub saved: DimConfig,
    pub store: ConfigStore,
    /// Feeds the controller's worker. `None` until startup wires it.
    pub publisher: Option<EventPublisher>,
}

impl Default for WindowsRuntimeState {
    fn default() -> Self {
        Self {
            hwnd: HWND::default(),
            mode: DimMode::Enabled,
            saved: DimConfig::default(),
            store: ConfigStore::default_location(),
            publisher: None,
        }
    }
}

thread_local! {
    /// Global application state for the UI thread.
    pub static STATE: RefCell<WindowsRuntimeState> = RefCell::new(WindowsRuntimeState::default());
}
