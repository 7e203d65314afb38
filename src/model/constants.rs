//! Configuration constants and default values.
//!
//! This module contains all application constants including dimming defaults,
//! persisted config keys, validation limits, and the shell window classes
//! that must never be touched.

// === Dimming Defaults ===

/// Fully opaque alpha value.
pub const ALPHA_OPAQUE: u8 = 255;

/// Default alpha for dimmed windows (50% of fully opaque, truncated).
pub const DEFAULT_TRANSPARENCY_DIM: u8 = ALPHA_OPAQUE / 2;

/// Default tint color, passed through as the color key (0x00BBGGRR).
pub const DEFAULT_TINT: u32 = 0x0000_0080;

/// Mask for a 24-bit RGB value.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

// === Config File Keys ===

/// Key for the dim transparency (0-255).
pub const PREF_TRANSPARENCY: &str = "transparency";

/// Key for the tint color (24-bit RGB integer).
pub const PREF_TINT: &str = "tint";

/// File name of the config file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".focus_config.json";

// === Validation Limits ===

/// Minimum transparency value.
pub const MIN_TRANSPARENCY: u8 = 0;

/// Maximum transparency value.
pub const MAX_TRANSPARENCY: u8 = 255;

// === Excluded Window Classes ===

/// Taskbar shell window.
pub const CLASS_SHELL_TRAY: &str = "Shell_TrayWnd";

/// Start button and other system button windows.
pub const CLASS_BUTTON: &str = "Button";

/// Core shell windows (start menu, search, action center).
pub const CLASS_CORE_WINDOW: &str = "Windows.UI.Core.CoreWindow";

/// Window classes that are never mutated. Matched exactly, case-sensitive.
pub const EXCLUDED_CLASSES: &[&str] = &[CLASS_SHELL_TRAY, CLASS_BUTTON, CLASS_CORE_WINDOW];

// === Shutdown ===

/// Upper bound on how long an exit path waits for the cleanup pass, in milliseconds.
pub const CLEANUP_TIMEOUT_MS: u64 = 3000;
