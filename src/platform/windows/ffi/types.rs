//! Conversions and constants for Win32 FFI.

use std::ffi::c_void;

use windows::Win32::Foundation::HWND;

use crate::engine::WindowHandle;

// WinEvent constants (not all are exposed by windows-rs)
pub const EVENT_OBJECT_FOCUS: u32 = 0x8005;
pub const WINEVENT_OUTOFCONTEXT: u32 = 0x0000;
pub const WINEVENT_SKIPOWNPROCESS: u32 = 0x0002;

// Tray notification codes delivered in LPARAM
pub const NOTIFY_RBUTTONUP: u32 = 0x0205;
pub const NOTIFY_LBUTTONDBLCLK: u32 = 0x0203;

/// Engine handle for a Win32 window.
pub fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd.0 as isize)
}

/// Win32 window for an engine handle.
pub fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

/// Null-terminated UTF-16 copy of `s`.
pub fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Copy `s` into a fixed UTF-16 buffer, truncating and keeping a terminator.
pub fn copy_wide(dst: &mut [u16], s: &str) {
    let max = dst.len().saturating_sub(1);
    for (slot, c) in dst.iter_mut().zip(s.encode_utf16().take(max)) {
        *slot = c;
    }
}
