//! Focus event source: a process-wide WinEvent hook.
//!
//! The hook is out-of-context, so the callback runs on the thread that
//! installed it while that thread pumps messages. It only publishes a
//! `FocusChanged` event for the foreground window; passes run on the worker.
//! Notifications caused by this process (including its own dimming) are
//! skipped by the OS.

use windows::Win32::Foundation::{GetLastError, HWND};
use windows::Win32::UI::Accessibility::{SetWinEventHook, UnhookWinEvent, HWINEVENTHOOK};
use windows::Win32::UI::WindowsAndMessaging::{GetAncestor, GetForegroundWindow, GA_ROOTOWNER};

use crate::error::DimError;
use crate::events::{self, DimEvent};

use super::ffi::{from_hwnd, EVENT_OBJECT_FOCUS, WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS};

/// Installed hook. Dropping it unhooks.
pub struct FocusHook {
    hook: HWINEVENTHOOK,
}

impl Drop for FocusHook {
    fn drop(&mut self) {
        unsafe {
            if !UnhookWinEvent(self.hook).as_bool() {
                tracing::warn!("failed to unhook focus events");
            }
        }
    }
}

/// Subscribe to focus changes across all processes.
///
/// Requires `events::install_publisher` to have been called; until then
/// notifications are dropped.
pub fn install_focus_hook() -> Result<FocusHook, DimError> {
    let hook = unsafe {
        SetWinEventHook(
            EVENT_OBJECT_FOCUS,
            EVENT_OBJECT_FOCUS,
            None,
            Some(focus_event_proc),
            0,
            0,
            WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
        )
    };

    if hook.is_invalid() {
        let code = unsafe { GetLastError() }.to_hresult().0;
        return Err(DimError::Subscription { code });
    }

    tracing::info!("focus hook installed");
    Ok(FocusHook { hook })
}

unsafe extern "system" fn focus_event_proc(
    _hook: HWINEVENTHOOK,
    _event: u32,
    hwnd: HWND,
    _id_object: i32,
    _id_child: i32,
    _id_event_thread: u32,
    _dwms_event_time: u32,
) {
    if hwnd.is_invalid() {
        return;
    }

    // Focus also lands on menus and dropdowns, which are their own root; the
    // foreground window is the one the user works in
    let foreground = GetForegroundWindow();
    let target = if foreground.is_invalid() {
        let owner = GetAncestor(hwnd, GA_ROOTOWNER);
        if owner.is_invalid() {
            hwnd
        } else {
            owner
        }
    } else {
        foreground
    };

    if !events::publish(DimEvent::FocusChanged(from_hwnd(target))) {
        tracing::trace!("focus change dropped, no consumer");
    }
}
