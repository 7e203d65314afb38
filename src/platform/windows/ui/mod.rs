//! UI components for Windows.

pub mod dialogs;
pub mod settings;
pub mod tray;

pub use dialogs::*;
pub use settings::*;
pub use tray::*;
