//! Win32 implementation of the engine's OS primitives.
//!
//! All calls go through user32 and are valid from any thread; the engine
//! serializes them.

use windows::core::BOOL;
use windows::Win32::Foundation::{
    GetLastError, SetLastError, COLORREF, ERROR_SUCCESS, HWND, LPARAM, WIN32_ERROR,
};
use windows::Win32::Graphics::Gdi::{
    RedrawWindow, RDW_ALLCHILDREN, RDW_ERASE, RDW_FRAME, RDW_INVALIDATE,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClassNameW, GetForegroundWindow, GetWindowLongPtrW, IsIconic,
    IsWindowVisible, SetLayeredWindowAttributes, SetWindowLongPtrW, GWL_EXSTYLE, LWA_ALPHA,
    LWA_COLORKEY,
};

use crate::engine::{
    LayeredWindowOps, OverlayParams, WindowClassification, WindowEnumerator, WindowHandle,
};
use crate::error::DimError;

use super::ffi::{from_hwnd, to_hwnd};

/// Longest class name Win32 allows.
const MAX_CLASS_NAME: usize = 256;

/// The live desktop. Zero-sized; every query goes straight to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

/// Error code of the last failed call on this thread, as an HRESULT.
fn last_error_code() -> i32 {
    unsafe { GetLastError() }.to_hresult().0
}

impl WindowEnumerator for Win32Desktop {
    fn enumerate(&self) -> Result<Vec<WindowHandle>, DimError> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            // The callback receives a raw pointer to our Vec
            EnumWindows(
                Some(collect_window),
                LPARAM(&mut handles as *mut Vec<WindowHandle> as isize),
            )
            .map_err(|e| DimError::Enumeration { code: e.code().0 })?;
        }
        Ok(handles)
    }

    fn foreground(&self) -> Result<WindowHandle, DimError> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            return Err(DimError::Foreground);
        }
        Ok(from_hwnd(hwnd))
    }

    fn classify(&self, handle: WindowHandle) -> Result<WindowClassification, DimError> {
        let hwnd = to_hwnd(handle);
        let mut class_buf = [0u16; MAX_CLASS_NAME];
        unsafe {
            let len = GetClassNameW(hwnd, &mut class_buf);
            if len <= 0 {
                return Err(DimError::Window {
                    handle,
                    code: last_error_code(),
                });
            }
            Ok(WindowClassification {
                visible: IsWindowVisible(hwnd).as_bool(),
                minimized: IsIconic(hwnd).as_bool(),
                class_name: String::from_utf16_lossy(&class_buf[..len as usize]),
            })
        }
    }
}

/// `EnumWindows` callback collecting every top-level handle.
unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    if !hwnd.is_invalid() {
        handles.push(from_hwnd(hwnd));
    }
    true.into()
}

impl LayeredWindowOps for Win32Desktop {
    fn ex_style(&self, handle: WindowHandle) -> Result<u32, DimError> {
        unsafe {
            // A zero return is only an error if the last-error value changed
            SetLastError(WIN32_ERROR(0));
            let style = GetWindowLongPtrW(to_hwnd(handle), GWL_EXSTYLE);
            if style == 0 && GetLastError() != ERROR_SUCCESS {
                return Err(DimError::Window {
                    handle,
                    code: last_error_code(),
                });
            }
            Ok(style as u32)
        }
    }

    fn set_ex_style(&self, handle: WindowHandle, style: u32) -> Result<(), DimError> {
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(to_hwnd(handle), GWL_EXSTYLE, style as isize);
            if previous == 0 && GetLastError() != ERROR_SUCCESS {
                return Err(DimError::Window {
                    handle,
                    code: last_error_code(),
                });
            }
        }
        Ok(())
    }

    fn set_layered_attributes(
        &self,
        handle: WindowHandle,
        params: OverlayParams,
    ) -> Result<(), DimError> {
        let (key, flags) = match params.color_key {
            Some(tint) => (COLORREF(tint.value()), LWA_ALPHA | LWA_COLORKEY),
            None => (COLORREF(0), LWA_ALPHA),
        };
        unsafe {
            SetLayeredWindowAttributes(to_hwnd(handle), key, params.alpha, flags)
                .map_err(|e| DimError::Window {
                    handle,
                    code: e.code().0,
                })
        }
    }

    fn redraw(&self, handle: WindowHandle) {
        unsafe {
            let _ = RedrawWindow(
                Some(to_hwnd(handle)),
                None,
                None,
                RDW_ERASE | RDW_INVALIDATE | RDW_FRAME | RDW_ALLCHILDREN,
            );
        }
    }
}
