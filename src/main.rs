//! FocusDim tray application.

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    focusdim::logging::init_logging();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        tracing::error!("focusdim only runs on Windows");
        std::process::exit(1);
    }
}
