//! Enable/disable state of the dimming engine (pure Rust, no FFI).

use crate::engine::WindowHandle;

/// The two states of the dim controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimMode {
    /// Non-focused windows are dimmed and focus changes re-run the dim pass.
    #[default]
    Enabled,
    /// Every window is left at full opacity; focus changes are ignored.
    Disabled,
}

/// Runtime state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimState {
    pub mode: DimMode,
    /// Reference window of the last completed dim pass.
    pub last_known_active: Option<WindowHandle>,
}

impl DimState {
    /// Returns true while dimming is active.
    pub fn is_enabled(&self) -> bool {
        self.mode == DimMode::Enabled
    }
}
