//! Focus assistant: dims every top-level window except the focused one.
//!
//! The engine, model, events and storage are pure Rust and run on any host
//! (that is what the tests exercise). The Win32 backend and the tray
//! application live under `platform::windows`.

pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;
pub mod platform;
pub mod storage;

pub use engine::{DimController, PassReport, WindowHandle};
pub use error::{ConfigError, DimError};
pub use events::{DimEvent, EventBus, EventPublisher};
pub use model::{DimConfig, DimMode, DimState, TintColor};
pub use storage::ConfigStore;
