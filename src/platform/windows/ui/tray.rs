//! System tray (notification area) icon for Windows.
//!
//! Provides a tray icon with context menu for controlling dimming.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
    NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CheckMenuItem, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW,
    SetForegroundWindow, TrackPopupMenu, HMENU, IDI_APPLICATION, MF_BYCOMMAND, MF_CHECKED,
    MF_SEPARATOR, MF_STRING, MF_UNCHECKED, TPM_BOTTOMALIGN, TPM_LEFTALIGN, TPM_RIGHTBUTTON,
    WM_USER,
};

use crate::model::DimMode;
use crate::platform::windows::ffi::copy_wide;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Menu item IDs
pub const MENU_DIM: u32 = 1001;
pub const MENU_UNDIM: u32 = 1002;
pub const MENU_CONFIGURE: u32 = 1003;
pub const MENU_EXIT: u32 = 1004;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

thread_local! {
    static TRAY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static TRAY_MENU: RefCell<Option<HMENU>> = const { RefCell::new(None) };
}

/// Install the system tray icon with context menu.
pub fn install_tray_icon(hwnd: HWND) {
    unsafe {
        TRAY_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

        let hicon = LoadIconW(None, IDI_APPLICATION).unwrap_or_default();

        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..Default::default()
        };
        copy_wide(&mut nid.szTip, tooltip(DimMode::Enabled));

        if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
            tracing::warn!("failed to add tray icon");
        }

        // Create context menu
        let menu = CreatePopupMenu().unwrap_or_default();
        let _ = AppendMenuW(menu, MF_STRING, MENU_DIM as usize, w!("Dim"));
        let _ = AppendMenuW(menu, MF_STRING, MENU_UNDIM as usize, w!("Undim"));
        let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
        let _ = AppendMenuW(menu, MF_STRING, MENU_CONFIGURE as usize, w!("Configure"));
        let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
        let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));

        TRAY_MENU.with(|m| *m.borrow_mut() = Some(menu));
    }
}

/// Remove the tray icon.
pub fn remove_tray_icon() {
    TRAY_HWND.with(|h| {
        if let Some(hwnd) = h.borrow_mut().take() {
            unsafe {
                let nid = NOTIFYICONDATAW {
                    cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
                    hWnd: hwnd,
                    uID: TRAY_ICON_ID,
                    ..Default::default()
                };
                let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
            }
        }
    });

    TRAY_MENU.with(|m| {
        if let Some(menu) = m.borrow_mut().take() {
            unsafe {
                let _ = DestroyMenu(menu);
            }
        }
    });
}

/// Show the context menu at the cursor position.
pub fn show_tray_menu(hwnd: HWND) {
    TRAY_MENU.with(|m| {
        if let Some(menu) = *m.borrow() {
            unsafe {
                let mut pt = POINT::default();
                let _ = GetCursorPos(&mut pt);

                // Required for menu to close when clicking outside
                let _ = SetForegroundWindow(hwnd);

                let _ = TrackPopupMenu(
                    menu,
                    TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
                    pt.x,
                    pt.y,
                    None, // nReserved - must be None/0
                    hwnd,
                    None,
                );
            }
        }
    });
}

/// Check the menu item and set the tooltip matching `mode`.
pub fn update_tray_state(mode: DimMode) {
    let (dim, undim) = match mode {
        DimMode::Enabled => (MF_CHECKED, MF_UNCHECKED),
        DimMode::Disabled => (MF_UNCHECKED, MF_CHECKED),
    };

    TRAY_MENU.with(|m| {
        if let Some(menu) = *m.borrow() {
            unsafe {
                CheckMenuItem(menu, MENU_DIM, (MF_BYCOMMAND | dim).0);
                CheckMenuItem(menu, MENU_UNDIM, (MF_BYCOMMAND | undim).0);
            }
        }
    });

    TRAY_HWND.with(|h| {
        if let Some(hwnd) = *h.borrow() {
            unsafe {
                let mut nid = NOTIFYICONDATAW {
                    cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
                    hWnd: hwnd,
                    uID: TRAY_ICON_ID,
                    uFlags: NIF_TIP,
                    ..Default::default()
                };
                copy_wide(&mut nid.szTip, tooltip(mode));
                let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
            }
        }
    });
}

fn tooltip(mode: DimMode) -> &'static str {
    match mode {
        DimMode::Enabled => "Focus - Dimming inactive windows",
        DimMode::Disabled => "Focus - Off",
    }
}
