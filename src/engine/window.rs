//! Window-level value types shared by the enumerator and the mutator.

use std::fmt;

use crate::model::{TintColor, ALPHA_OPAQUE};

/// Opaque identifier of a top-level window owned by the OS.
///
/// Never owns the window; only valid for the duration of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> isize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Per-window facts read fresh at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowClassification {
    pub visible: bool,
    pub minimized: bool,
    pub class_name: String,
}

/// Layered attributes to put on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayParams {
    pub alpha: u8,
    /// `None` means the color-key flag is not set.
    pub color_key: Option<TintColor>,
}

impl OverlayParams {
    /// Dimmed: alpha plus color key, both flags active.
    pub fn dim(alpha: u8, color_key: TintColor) -> Self {
        Self {
            alpha,
            color_key: Some(color_key),
        }
    }

    /// Undimmed: full opacity, no color-key effect.
    pub fn opaque() -> Self {
        Self {
            alpha: ALPHA_OPAQUE,
            color_key: None,
        }
    }
}
