//! Error notice shown when focus tracking cannot start.

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

use crate::error::DimError;
use crate::platform::windows::ffi::wide;

/// Tell the user focus changes will not be followed.
///
/// The tray keeps working; enable and disable still run their passes.
pub fn show_subscription_failure(hwnd: HWND, error: &DimError) {
    let title = wide("FocusDim");
    let message = wide(&format!(
        "Focus tracking could not be started.\n\n\
        {error}\n\n\
        Windows will not be re-dimmed when focus moves.\n\
        Use the tray menu to dim or undim manually."
    ));

    unsafe {
        MessageBoxW(
            Some(hwnd),
            PCWSTR(message.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}
