//! Application glue for the Windows shell.

pub mod helpers;
pub mod shutdown;
pub mod state;

pub use helpers::{publish_event, set_mode, toggle_mode};
pub use shutdown::{install_exit_handlers, restore_windows_and_wait};
pub use state::{WindowsRuntimeState, STATE};
