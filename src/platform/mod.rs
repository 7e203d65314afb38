//! Platform-specific implementations.
//!
//! Only Windows offers the primitives the engine needs (layered windows and
//! global focus-change hooks). The submodule provides:
//! - The enumerator and layered-window ops over user32
//! - The focus-change hook
//! - UI (tray icon, configure dialog, notices)

#[cfg(target_os = "windows")]
pub mod windows;
