//! Configuration storage.
//!
//! Persists the dimming parameters to a JSON file in the user's home directory.

mod config;

pub use config::*;
