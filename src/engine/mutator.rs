//! Applying and clearing the layered transparency overlay on one window.

use std::sync::Arc;

use crate::error::DimError;
use crate::model::TintColor;

use super::window::{OverlayParams, WindowHandle};

/// `WS_EX_LAYERED` extended style bit.
pub const EX_STYLE_LAYERED: u32 = 0x0008_0000;

/// Per-window primitives of the windowing subsystem.
pub trait LayeredWindowOps {
    /// Current extended style bits.
    fn ex_style(&self, handle: WindowHandle) -> Result<u32, DimError>;

    /// Replace the extended style bits.
    fn set_ex_style(&self, handle: WindowHandle, style: u32) -> Result<(), DimError>;

    /// Set alpha (always) and color key (when present) on a layered window.
    fn set_layered_attributes(
        &self,
        handle: WindowHandle,
        params: OverlayParams,
    ) -> Result<(), DimError>;

    /// Erase, invalidate and repaint the frame and all descendants.
    fn redraw(&self, handle: WindowHandle);
}

impl<T: LayeredWindowOps + ?Sized> LayeredWindowOps for Arc<T> {
    fn ex_style(&self, handle: WindowHandle) -> Result<u32, DimError> {
        (**self).ex_style(handle)
    }

    fn set_ex_style(&self, handle: WindowHandle, style: u32) -> Result<(), DimError> {
        (**self).set_ex_style(handle, style)
    }

    fn set_layered_attributes(
        &self,
        handle: WindowHandle,
        params: OverlayParams,
    ) -> Result<(), DimError> {
        (**self).set_layered_attributes(handle, params)
    }

    fn redraw(&self, handle: WindowHandle) {
        (**self).redraw(handle)
    }
}

/// Dim one window: `alpha` plus `color_key`.
pub fn apply_overlay<O: LayeredWindowOps + ?Sized>(
    ops: &O,
    handle: WindowHandle,
    alpha: u8,
    color_key: TintColor,
) -> Result<(), DimError> {
    write_overlay(ops, handle, OverlayParams::dim(alpha, color_key), true)
}

/// Undim one window: full opacity, no color key.
pub fn clear_overlay<O: LayeredWindowOps + ?Sized>(
    ops: &O,
    handle: WindowHandle,
) -> Result<(), DimError> {
    write_overlay(ops, handle, OverlayParams::opaque(), true)
}

/// Undim a window that cannot be repainted now (minimized).
pub fn clear_overlay_without_redraw<O: LayeredWindowOps + ?Sized>(
    ops: &O,
    handle: WindowHandle,
) -> Result<(), DimError> {
    write_overlay(ops, handle, OverlayParams::opaque(), false)
}

fn write_overlay<O: LayeredWindowOps + ?Sized>(
    ops: &O,
    handle: WindowHandle,
    params: OverlayParams,
    redraw: bool,
) -> Result<(), DimError> {
    let style = ops.ex_style(handle)?;
    if style & EX_STYLE_LAYERED == 0 {
        ops.set_ex_style(handle, style | EX_STYLE_LAYERED)?;
    }
    ops.set_layered_attributes(handle, params)?;
    if redraw {
        ops.redraw(handle);
    }
    Ok(())
}
