//! Configure dialog for Windows.
//!
//! One transparency slider with OK and Cancel. Moving the slider previews the
//! new dim level immediately; OK saves it, Cancel or close reverts to the
//! last saved value.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, LoadCursorW, RegisterClassW, SendMessageW,
    SetForegroundWindow, SetWindowTextW, ShowWindow, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT,
    HMENU, IDC_ARROW, SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_CREATE,
    WM_HSCROLL, WNDCLASSW, WS_CAPTION, WS_CHILD, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_OVERLAPPED,
    WS_TABSTOP, WS_VISIBLE,
};

use crate::events::DimEvent;
use crate::model::constants::*;
use crate::model::DimConfig;
use crate::platform::windows::app::{publish_event, STATE};
use crate::platform::windows::ffi::wide;

// Control IDs
const ID_TRANSP_SLIDER: i32 = 101;
const ID_TRANSP_VALUE: i32 = 102;
const ID_OK_BUTTON: i32 = 103;
const ID_CANCEL_BUTTON: i32 = 104;

// Trackbar messages (from commctrl.h)
const TBM_SETRANGE: u32 = 0x0406;
const TBM_SETPOS: u32 = 0x0405;
const TBM_GETPOS: u32 = 0x0400;

// Window dimensions
const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 170;

// Layout constants
const MARGIN: i32 = 20;
const ROW_HEIGHT: i32 = 40;
const LABEL_WIDTH: i32 = 100;
const VALUE_WIDTH: i32 = 80;
const SLIDER_WIDTH: i32 = 170;
const BUTTON_WIDTH: i32 = 80;

thread_local! {
    static SETTINGS_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static VALUE_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    /// Value shown by the slider, published as a live preview.
    static PREVIEW: RefCell<Option<DimConfig>> = const { RefCell::new(None) };
}

/// Open the configure dialog, or bring it forward if already open.
///
/// The config file is re-read each time so the dialog starts from what is on disk.
pub fn open_settings_window() {
    if let Some(hwnd) = SETTINGS_HWND.with(|h| *h.borrow()) {
        unsafe {
            let _ = SetForegroundWindow(hwnd);
        }
        return;
    }

    let saved = STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.saved = state.store.load();
        state.saved
    });
    PREVIEW.with(|p| *p.borrow_mut() = Some(saved));

    unsafe {
        let class_name = w!("FocusDimConfigure");
        let hinstance = GetModuleHandleW(None).unwrap_or_default();

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(settings_wnd_proc),
            hInstance: hinstance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        // Fails harmlessly when the class is already registered
        let _ = RegisterClassW(&wc);

        // No close button: the dialog is dismissed through OK or Cancel
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW | WS_EX_TOPMOST,
            class_name,
            w!("Focus Configuration"),
            WS_OVERLAPPED | WS_CAPTION,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(hinstance.into()),
            None,
        );

        let hwnd = match hwnd {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(error = %e, "failed to create configure dialog");
                return;
            }
        };

        SETTINGS_HWND.with(|h| *h.borrow_mut() = Some(hwnd));
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);
    }
}

/// Close the dialog, keeping (`confirm`) or reverting the previewed value.
pub fn close_settings_window(confirm: bool) {
    let preview = PREVIEW.with(|p| p.borrow_mut().take());

    if confirm {
        if let Some(config) = preview {
            let result = STATE.with(|s| {
                let mut state = s.borrow_mut();
                state.saved = config;
                state.store.save(&config)
            });
            if let Err(e) = result {
                tracing::warn!(error = %e, "config not saved, keeping it in memory");
            }
            publish_event(DimEvent::ConfigUpdated(config));
        }
    } else {
        let saved = STATE.with(|s| s.borrow().saved);
        if preview != Some(saved) {
            publish_event(DimEvent::ConfigUpdated(saved));
        }
    }

    // Take the HWND first, releasing the borrow before calling DestroyWindow
    // (DestroyWindow sends WM_DESTROY synchronously)
    let hwnd_to_destroy = SETTINGS_HWND.with(|h| h.borrow_mut().take());
    VALUE_HWND.with(|h| *h.borrow_mut() = None);

    if let Some(hwnd) = hwnd_to_destroy {
        unsafe {
            let _ = DestroyWindow(hwnd);
        }
    }
}

unsafe extern "system" fn settings_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_controls(hwnd);
            LRESULT(0)
        }

        WM_COMMAND => {
            match (wparam.0 & 0xFFFF) as i32 {
                ID_OK_BUTTON => close_settings_window(true),
                ID_CANCEL_BUTTON => close_settings_window(false),
                _ => {}
            }
            LRESULT(0)
        }

        WM_HSCROLL => {
            let slider_hwnd = HWND(lparam.0 as *mut _);
            handle_slider_change(slider_hwnd);
            LRESULT(0)
        }

        WM_CLOSE => {
            close_settings_window(false);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_controls(hwnd: HWND) {
    let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();
    let config = PREVIEW.with(|p| p.borrow().unwrap_or_default());

    let y = MARGIN;

    create_label(hwnd, hinstance, MARGIN, y, "Transparency");
    let value = create_value_label(hwnd, hinstance, MARGIN + LABEL_WIDTH, y, ID_TRANSP_VALUE);
    set_value_text(value, &config);
    VALUE_HWND.with(|h| *h.borrow_mut() = Some(value));

    let slider = create_slider(
        hwnd,
        hinstance,
        MARGIN + LABEL_WIDTH + VALUE_WIDTH + 5,
        y,
        ID_TRANSP_SLIDER,
    );
    init_slider(
        slider,
        i32::from(MIN_TRANSPARENCY),
        i32::from(MAX_TRANSPARENCY),
        i32::from(config.transparency_dim),
    );

    let y = y + ROW_HEIGHT + 10;
    let right = WINDOW_WIDTH - MARGIN - 16;
    create_button(hwnd, hinstance, right - 2 * BUTTON_WIDTH - 10, y, "OK", ID_OK_BUTTON);
    create_button(hwnd, hinstance, right - BUTTON_WIDTH, y, "Cancel", ID_CANCEL_BUTTON);
}

unsafe fn create_label(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str) {
    let text_wide = wide(text);
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("STATIC"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE,
        x,
        y + 4,
        LABEL_WIDTH,
        20,
        Some(hwnd),
        None,
        Some(hinstance),
        None,
    );
}

unsafe fn create_value_label(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("STATIC"),
        w!("0"),
        WS_CHILD | WS_VISIBLE | WINDOW_STYLE(0x0001), // SS_CENTER
        x,
        y + 4,
        VALUE_WIDTH,
        20,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default()
}

unsafe fn create_slider(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("msctls_trackbar32"),
        PCWSTR::null(),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        SLIDER_WIDTH,
        28,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default()
}

unsafe fn create_button(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str, id: i32) {
    let text_wide = wide(text);
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        BUTTON_WIDTH,
        26,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    );
}

unsafe fn init_slider(slider: HWND, min: i32, max: i32, pos: i32) {
    let range = ((max as isize) << 16) | (min as isize);
    SendMessageW(slider, TBM_SETRANGE, Some(WPARAM(1)), Some(LPARAM(range)));
    SendMessageW(
        slider,
        TBM_SETPOS,
        Some(WPARAM(1)),
        Some(LPARAM(pos as isize)),
    );
}

/// Raw alpha plus its share of full opacity, e.g. `127 (50%)`.
unsafe fn set_value_text(hwnd: HWND, config: &DimConfig) {
    let text = format!(
        "{} ({}%)",
        config.transparency_dim,
        config.transparency_pct()
    );
    let text_wide = wide(&text);
    let _ = SetWindowTextW(hwnd, PCWSTR(text_wide.as_ptr()));
}

unsafe fn handle_slider_change(slider_hwnd: HWND) {
    use windows::Win32::UI::WindowsAndMessaging::GetDlgCtrlID;

    if GetDlgCtrlID(slider_hwnd) != ID_TRANSP_SLIDER {
        return;
    }

    let pos = SendMessageW(slider_hwnd, TBM_GETPOS, None, None).0;
    let transparency = pos.clamp(MIN_TRANSPARENCY as isize, MAX_TRANSPARENCY as isize) as u8;

    let (next, changed) = PREVIEW.with(|p| {
        let mut p = p.borrow_mut();
        let current = p.unwrap_or_else(|| STATE.with(|s| s.borrow().saved));
        let next = current.with_transparency(transparency);
        let changed = *p != Some(next);
        *p = Some(next);
        (next, changed)
    });

    if let Some(value_hwnd) = VALUE_HWND.with(|h| *h.borrow()) {
        set_value_text(value_hwnd, &next);
    }

    // Trackbars send several notifications per drag step; only publish real changes
    if changed {
        publish_event(DimEvent::ConfigUpdated(next));
    }
}
