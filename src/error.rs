//! Error types for the dimming engine and the config store.
//!
//! None of these are fatal. Window errors are counted and skipped, enumeration
//! errors turn a pass into a no-op, config errors fall back to defaults.
//! Only a subscription failure is surfaced to the user.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::WindowHandle;

/// Errors raised by the OS windowing primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimError {
    /// A window closed or rejected a mutation mid-pass.
    #[error("window {handle} rejected the update (os error {code:#010x})")]
    Window { handle: WindowHandle, code: i32 },

    /// The top-level window list could not be read.
    #[error("failed to enumerate top-level windows (os error {code:#010x})")]
    Enumeration { code: i32 },

    /// No foreground window could be determined.
    #[error("no foreground window available")]
    Foreground,

    /// The focus-change notification hook could not be registered.
    #[error("failed to subscribe to focus-change notifications (os error {code:#010x})")]
    Subscription { code: i32 },
}

/// Errors raised while reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[source] serde_json::Error),
}
