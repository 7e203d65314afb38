//! The window-dimming engine.
//!
//! OS access goes through two traits, [`WindowEnumerator`] and
//! [`LayeredWindowOps`], so the controller runs unchanged against the Win32
//! backend in `platform::windows` or an in-memory desktop in tests.

pub mod controller;
pub mod enumerator;
pub mod mutator;
pub mod window;
pub mod worker;

pub use controller::{DimController, PassReport};
pub use enumerator::{is_eligible, ExclusionSet, WindowEnumerator};
pub use mutator::{
    apply_overlay, clear_overlay, clear_overlay_without_redraw, LayeredWindowOps, EX_STYLE_LAYERED,
};
pub use window::{OverlayParams, WindowClassification, WindowHandle};
pub use worker::{spawn_worker, CleanupLatch, DimWorker};
