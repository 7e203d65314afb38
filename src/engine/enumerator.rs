//! Window enumeration and eligibility.
//!
//! Enumeration only materializes handles. Eligibility is a separate, pure
//! predicate evaluated fresh for every handle on every pass.

use std::sync::Arc;

use crate::error::DimError;
use crate::model::EXCLUDED_CLASSES;

use super::window::{WindowClassification, WindowHandle};

/// Read-only queries against the windowing subsystem.
pub trait WindowEnumerator {
    /// Snapshot of all current top-level windows, in OS order.
    fn enumerate(&self) -> Result<Vec<WindowHandle>, DimError>;

    /// The window currently holding input focus.
    fn foreground(&self) -> Result<WindowHandle, DimError>;

    /// Visibility, minimized state and class name of one window.
    fn classify(&self, handle: WindowHandle) -> Result<WindowClassification, DimError>;
}

impl<T: WindowEnumerator + ?Sized> WindowEnumerator for Arc<T> {
    fn enumerate(&self) -> Result<Vec<WindowHandle>, DimError> {
        (**self).enumerate()
    }

    fn foreground(&self) -> Result<WindowHandle, DimError> {
        (**self).foreground()
    }

    fn classify(&self, handle: WindowHandle) -> Result<WindowClassification, DimError> {
        (**self).classify(handle)
    }
}

/// Window classes that must never be mutated.
///
/// Exact, case-sensitive match. Known limitation: class names of shell
/// windows change across OS releases and are not widened here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    classes: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(EXCLUDED_CLASSES.iter().copied())
    }
}

/// True if `handle` may receive an overlay during a pass with `active` as reference.
///
/// Pass `None` for `active` in the undim-all pass, where no window is skipped for focus.
pub fn is_eligible(
    handle: WindowHandle,
    active: Option<WindowHandle>,
    info: &WindowClassification,
    exclusions: &ExclusionSet,
) -> bool {
    if active == Some(handle) {
        return false;
    }
    info.visible && !info.minimized && !exclusions.contains(&info.class_name)
}
