//! FFI helpers for Windows APIs.
//!
//! Bindings come from `windows-rs`; this module only holds handle
//! conversions, UTF-16 helpers, and constants the crate does not export.

pub mod types;

pub use types::*;
