//! In-memory desktop shared by the integration tests.
//!
//! Mirrors the parts of user32 the engine touches: a top-level window list,
//! a foreground window, extended style bits and layered attributes. Layered
//! attributes are rejected until the layered style bit is set, as on Windows.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use focusdim::engine::{
    LayeredWindowOps, OverlayParams, WindowClassification, WindowEnumerator, WindowHandle,
    EX_STYLE_LAYERED,
};
use focusdim::model::ALPHA_OPAQUE;
use focusdim::DimError;

/// `ERROR_INVALID_WINDOW_HANDLE` as an HRESULT.
pub const INVALID_HANDLE_CODE: i32 = 0x8007_0578_u32 as i32;

pub const A: WindowHandle = WindowHandle::from_raw(0xA);
pub const B: WindowHandle = WindowHandle::from_raw(0xB);
pub const C: WindowHandle = WindowHandle::from_raw(0xC);
pub const D: WindowHandle = WindowHandle::from_raw(0xD);

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub class_name: String,
    pub visible: bool,
    pub minimized: bool,
    pub ex_style: u32,
    pub alpha: u8,
    pub color_key: Option<u32>,
}

impl FakeWindow {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            visible: true,
            minimized: false,
            ex_style: 0,
            alpha: ALPHA_OPAQUE,
            color_key: None,
        }
    }
}

/// One write issued against a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    ExStyle(WindowHandle, u32),
    Attributes(WindowHandle, OverlayParams),
    Redraw(WindowHandle),
}

impl Mutation {
    pub fn handle(&self) -> WindowHandle {
        match *self {
            Mutation::ExStyle(h, _) | Mutation::Attributes(h, _) | Mutation::Redraw(h) => h,
        }
    }
}

#[derive(Default)]
struct Desktop {
    windows: BTreeMap<WindowHandle, FakeWindow>,
    foreground: Option<WindowHandle>,
    fail_enumeration: bool,
    rejecting: HashSet<WindowHandle>,
    log: Vec<Mutation>,
}

#[derive(Default)]
pub struct FakeDesktop {
    inner: Mutex<Desktop>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Desktop with visible, restored application windows of class `App`.
    pub fn with_apps(handles: &[WindowHandle]) -> Self {
        let desktop = Self::new();
        for &handle in handles {
            desktop.add(handle, "App");
        }
        desktop
    }

    fn lock(&self) -> MutexGuard<'_, Desktop> {
        self.inner.lock().unwrap()
    }

    pub fn add(&self, handle: WindowHandle, class_name: &str) {
        self.add_window(handle, FakeWindow::new(class_name));
    }

    pub fn add_window(&self, handle: WindowHandle, window: FakeWindow) {
        self.lock().windows.insert(handle, window);
    }

    /// Simulate the window being destroyed.
    pub fn close(&self, handle: WindowHandle) {
        self.lock().windows.remove(&handle);
    }

    pub fn set_foreground(&self, handle: Option<WindowHandle>) {
        self.lock().foreground = handle;
    }

    pub fn set_minimized(&self, handle: WindowHandle, minimized: bool) {
        if let Some(w) = self.lock().windows.get_mut(&handle) {
            w.minimized = minimized;
        }
    }

    pub fn set_visible(&self, handle: WindowHandle, visible: bool) {
        if let Some(w) = self.lock().windows.get_mut(&handle) {
            w.visible = visible;
        }
    }

    pub fn fail_enumeration(&self, fail: bool) {
        self.lock().fail_enumeration = fail;
    }

    /// Make every attribute write to `handle` fail.
    pub fn reject(&self, handle: WindowHandle) {
        self.lock().rejecting.insert(handle);
    }

    pub fn window(&self, handle: WindowHandle) -> Option<FakeWindow> {
        self.lock().windows.get(&handle).cloned()
    }

    pub fn alpha(&self, handle: WindowHandle) -> u8 {
        self.window(handle).map(|w| w.alpha).unwrap_or(ALPHA_OPAQUE)
    }

    pub fn color_key(&self, handle: WindowHandle) -> Option<u32> {
        self.window(handle).and_then(|w| w.color_key)
    }

    pub fn is_layered(&self, handle: WindowHandle) -> bool {
        self.window(handle)
            .map(|w| w.ex_style & EX_STYLE_LAYERED != 0)
            .unwrap_or(false)
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.lock().log.clone()
    }

    pub fn mutations_of(&self, handle: WindowHandle) -> Vec<Mutation> {
        self.mutations()
            .into_iter()
            .filter(|m| m.handle() == handle)
            .collect()
    }

    pub fn clear_log(&self) {
        self.lock().log.clear();
    }
}

impl WindowEnumerator for FakeDesktop {
    fn enumerate(&self) -> Result<Vec<WindowHandle>, DimError> {
        let desktop = self.lock();
        if desktop.fail_enumeration {
            return Err(DimError::Enumeration { code: 5 });
        }
        Ok(desktop.windows.keys().copied().collect())
    }

    fn foreground(&self) -> Result<WindowHandle, DimError> {
        self.lock().foreground.ok_or(DimError::Foreground)
    }

    fn classify(&self, handle: WindowHandle) -> Result<WindowClassification, DimError> {
        self.lock()
            .windows
            .get(&handle)
            .map(|w| WindowClassification {
                visible: w.visible,
                minimized: w.minimized,
                class_name: w.class_name.clone(),
            })
            .ok_or(DimError::Window {
                handle,
                code: INVALID_HANDLE_CODE,
            })
    }
}

impl LayeredWindowOps for FakeDesktop {
    fn ex_style(&self, handle: WindowHandle) -> Result<u32, DimError> {
        self.lock()
            .windows
            .get(&handle)
            .map(|w| w.ex_style)
            .ok_or(DimError::Window {
                handle,
                code: INVALID_HANDLE_CODE,
            })
    }

    fn set_ex_style(&self, handle: WindowHandle, style: u32) -> Result<(), DimError> {
        let mut desktop = self.lock();
        desktop.log.push(Mutation::ExStyle(handle, style));
        let window = desktop.windows.get_mut(&handle).ok_or(DimError::Window {
            handle,
            code: INVALID_HANDLE_CODE,
        })?;
        window.ex_style = style;
        Ok(())
    }

    fn set_layered_attributes(
        &self,
        handle: WindowHandle,
        params: OverlayParams,
    ) -> Result<(), DimError> {
        let mut desktop = self.lock();
        desktop.log.push(Mutation::Attributes(handle, params));
        let rejecting = desktop.rejecting.contains(&handle);
        let window = desktop.windows.get_mut(&handle).ok_or(DimError::Window {
            handle,
            code: INVALID_HANDLE_CODE,
        })?;
        if rejecting || window.ex_style & EX_STYLE_LAYERED == 0 {
            return Err(DimError::Window { handle, code: 5 });
        }
        window.alpha = params.alpha;
        window.color_key = params.color_key.map(|c| c.value());
        Ok(())
    }

    fn redraw(&self, handle: WindowHandle) {
        self.lock().log.push(Mutation::Redraw(handle));
    }
}
