//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - FFI conversions between engine handles and `HWND`
//! - The user32-backed window enumerator and layered-style mutator
//! - The focus-change hook
//! - UI components (tray icon, configure dialog, error notice)

pub mod app;
pub mod desktop;
pub mod ffi;
pub mod focus_hook;
pub mod ui;

// Re-export commonly used items
pub use desktop::Win32Desktop;
pub use focus_hook::{install_focus_hook, FocusHook};
pub use ui::*;
