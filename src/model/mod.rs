//! Application domain model.
//!
//! This module contains pure data (no FFI dependencies): the dimming
//! parameters, the enable/disable state, and configuration constants.
//!
//! Persistence lives in `storage`, OS access in `platform::windows`.

pub mod constants;
pub mod dim_config;
pub mod dim_state;

pub use constants::*;
pub use dim_config::{DimConfig, TintColor};
pub use dim_state::{DimMode, DimState};
