//! Dimming parameters (pure Rust, no FFI).

use super::constants::*;

/// A 24-bit RGB value in the layout the OS expects for a color key (0x00BBGGRR).
///
/// The value is stored and forwarded untouched; no channel swizzling happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintColor(u32);

impl TintColor {
    /// Build a tint from a raw value. Returns `None` if any bit above 24 is set.
    pub fn new(raw: u32) -> Option<Self> {
        if raw & !RGB_MASK == 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Build a tint by discarding everything above the low 24 bits.
    pub fn from_masked(raw: u32) -> Self {
        Self(raw & RGB_MASK)
    }

    /// Raw 24-bit value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self(DEFAULT_TINT)
    }
}

/// Parameters used by a dim pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimConfig {
    /// Alpha applied to every non-focused eligible window.
    pub transparency_dim: u8,
    /// Passed through as the color key. Real tinting is not implemented.
    pub tint: TintColor,
    /// Reserved. Always `false`; never persisted.
    pub apply_tint: bool,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self {
            transparency_dim: DEFAULT_TRANSPARENCY_DIM,
            tint: TintColor::default(),
            apply_tint: false,
        }
    }
}

impl DimConfig {
    /// Same config with a different dim alpha.
    pub fn with_transparency(self, transparency_dim: u8) -> Self {
        Self {
            transparency_dim,
            ..self
        }
    }

    /// Dim level as a percentage of full opacity, for display.
    pub fn transparency_pct(&self) -> u8 {
        ((u32::from(self.transparency_dim) * 100 + u32::from(ALPHA_OPAQUE) / 2)
            / u32::from(ALPHA_OPAQUE)) as u8
    }
}
