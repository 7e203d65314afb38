//! Windows-specific entry point and application logic.
//!
//! The UI thread owns a hidden host window, the tray icon and the focus hook.
//! Every dimming pass runs on the worker thread; the UI thread only publishes
//! events to it.

use std::error::Error;
use std::sync::Arc;

use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::{InitCommonControlsEx, ICC_BAR_CLASSES, INITCOMMONCONTROLSEX};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    PostQuitMessage, RegisterClassW, TranslateMessage, MSG, WM_COMMAND, WM_CREATE, WM_DESTROY,
    WM_ENDSESSION, WNDCLASSW, WS_EX_TOOLWINDOW, WS_POPUP,
};

use focusdim::engine::{spawn_worker, DimController};
use focusdim::events::{install_publisher, DimEvent, EventBus};
use focusdim::model::DimMode;
use focusdim::platform::windows::app::{
    install_exit_handlers, publish_event, restore_windows_and_wait, set_mode, toggle_mode, STATE,
};
use focusdim::platform::windows::ffi::{NOTIFY_LBUTTONDBLCLK, NOTIFY_RBUTTONUP};
use focusdim::platform::windows::ui::dialogs::show_subscription_failure;
use focusdim::platform::windows::ui::settings::window as settings_window;
use focusdim::platform::windows::ui::tray::{
    self, MENU_CONFIGURE, MENU_DIM, MENU_EXIT, MENU_UNDIM, WM_TRAYICON,
};
use focusdim::platform::windows::{install_focus_hook, Win32Desktop};
use focusdim::storage::ConfigStore;

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        tracing::error!(error = %e, "focusdim failed to start");
        std::process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let store = ConfigStore::default_location();
    let config = store.load_or_create();
    tracing::info!(
        path = %store.path().display(),
        transparency = config.transparency_dim,
        "config loaded"
    );

    let bus = EventBus::new();
    if !install_publisher(bus.publisher()) {
        tracing::warn!("event publisher already installed");
    }

    let controller = Arc::new(DimController::new(Win32Desktop, Win32Desktop, config));
    let mut worker = spawn_worker(controller, bus)?;

    STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.mode = DimMode::Enabled;
        state.saved = config;
        state.store = store;
        state.publisher = Some(worker.publisher());
    });

    install_exit_handlers(worker.latch());

    let hwnd = unsafe { create_host_window()? };
    STATE.with(|s| s.borrow_mut().hwnd = hwnd);

    tray::install_tray_icon(hwnd);
    tray::update_tray_state(DimMode::Enabled);

    // Dimming still works from the tray without the hook
    let hook = match install_focus_hook() {
        Ok(hook) => Some(hook),
        Err(e) => {
            tracing::error!(error = %e, "focus tracking unavailable");
            show_subscription_failure(hwnd, &e);
            None
        }
    };

    publish_event(DimEvent::EnableToggled);

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // Stop new focus events before the final undim pass
    drop(hook);
    worker.shutdown();
    tray::remove_tray_icon();
    tracing::info!("focusdim exited");

    Ok(())
}

unsafe fn create_host_window() -> windows::core::Result<HWND> {
    let icc = INITCOMMONCONTROLSEX {
        dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
        dwICC: ICC_BAR_CLASSES,
    };
    if !InitCommonControlsEx(&icc).as_bool() {
        tracing::warn!("common controls not initialized, configure slider may be missing");
    }

    let instance = GetModuleHandleW(None)?;
    let class_name = w!("FocusDimHost");

    let wc = WNDCLASSW {
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        lpszClassName: class_name,
        ..Default::default()
    };
    RegisterClassW(&wc);

    // Never shown; receives tray callbacks and session messages only
    CreateWindowExW(
        WS_EX_TOOLWINDOW,
        class_name,
        w!("FocusDim"),
        WS_POPUP,
        0,
        0,
        0,
        0,
        None,
        None,
        Some(instance.into()),
        None,
    )
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            // System tray icon messages
            msg if msg == WM_TRAYICON => {
                match lparam.0 as u32 {
                    NOTIFY_RBUTTONUP => tray::show_tray_menu(hwnd),
                    NOTIFY_LBUTTONDBLCLK => toggle_mode(),
                    _ => {}
                }
                LRESULT(0)
            }

            // Context menu commands
            WM_COMMAND => {
                match (wparam.0 & 0xFFFF) as u32 {
                    MENU_DIM => set_mode(DimMode::Enabled),
                    MENU_UNDIM => set_mode(DimMode::Disabled),
                    MENU_CONFIGURE => settings_window::open_settings_window(),
                    MENU_EXIT => {
                        tracing::info!("exit requested from tray");
                        let _ = DestroyWindow(hwnd);
                    }
                    _ => {}
                }
                LRESULT(0)
            }

            // The process may be terminated right after this returns
            WM_ENDSESSION => {
                if wparam.0 != 0 {
                    tracing::info!("session ending");
                    restore_windows_and_wait();
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
