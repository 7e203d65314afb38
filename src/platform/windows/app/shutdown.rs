//! Exit paths that do not go through the message loop.
//!
//! Console control events and session end can terminate the process shortly
//! after their handler returns, so both request the cleanup pass and wait for
//! it (bounded) before returning.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use windows::core::BOOL;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::SetConsoleCtrlHandler;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{PostThreadMessageW, WM_QUIT};

use crate::engine::CleanupLatch;
use crate::events::{self, DimEvent};
use crate::model::CLEANUP_TIMEOUT_MS;

static LATCH: OnceLock<Arc<CleanupLatch>> = OnceLock::new();
static UI_THREAD_ID: AtomicU32 = AtomicU32::new(0);

/// Register the console control handler. Call from the UI thread.
pub fn install_exit_handlers(latch: Arc<CleanupLatch>) {
    if LATCH.set(latch).is_err() {
        tracing::warn!("exit handlers already installed");
        return;
    }
    unsafe {
        UI_THREAD_ID.store(GetCurrentThreadId(), Ordering::SeqCst);
        if let Err(e) = SetConsoleCtrlHandler(Some(console_ctrl_handler), true) {
            tracing::warn!(error = %e, "console control handler not installed");
        }
    }
}

/// Ask the worker to restore every window and wait for it.
///
/// Returns `false` if the cleanup did not finish in time.
pub fn restore_windows_and_wait() -> bool {
    events::publish(DimEvent::Shutdown);
    let finished = LATCH
        .get()
        .map(|latch| latch.wait(Duration::from_millis(CLEANUP_TIMEOUT_MS)))
        .unwrap_or(false);
    if !finished {
        tracing::warn!("cleanup pass did not finish before exit");
    }
    finished
}

unsafe extern "system" fn console_ctrl_handler(ctrl_type: u32) -> BOOL {
    tracing::info!(ctrl_type, "console exit requested");
    restore_windows_and_wait();
    let thread_id = UI_THREAD_ID.load(Ordering::SeqCst);
    if thread_id != 0 {
        let _ = PostThreadMessageW(thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
    }
    true.into()
}
