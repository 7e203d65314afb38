//! JSON configuration file.
//!
//! Stores settings in `~/.focus_config.json` as
//! `{ "transparency": <0-255>, "tint": <24-bit RGB> }`.
//!
//! Loading never fails: a missing file, unreadable JSON, or a bad value for
//! one key falls back to the default for what could not be read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::model::constants::*;
use crate::model::{DimConfig, TintColor};

/// Serializable config structure for JSON persistence.
#[derive(Serialize, Debug, Clone, PartialEq)]
struct Config {
    transparency: u8,
    tint: u32,
}

impl From<&DimConfig> for Config {
    fn from(config: &DimConfig) -> Self {
        Self {
            transparency: config.transparency_dim,
            tint: config.tint.value(),
        }
    }
}

/// Reads and writes [`DimConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `%USERPROFILE%/.focus_config.json`, falling back to `$HOME`, then the working directory.
    pub fn default_location() -> Self {
        let home = std::env::var_os("USERPROFILE")
            .or_else(|| std::env::var_os("HOME"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, returning defaults for anything that cannot be read.
    pub fn load(&self) -> DimConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(ConfigError::Read { ref source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no config file, using defaults");
                DimConfig::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                DimConfig::default()
            }
        }
    }

    /// Load the config, creating the file with defaults if it does not exist yet.
    pub fn load_or_create(&self) -> DimConfig {
        if self.path.exists() {
            return self.load();
        }
        let config = DimConfig::default();
        match self.save(&config) {
            Ok(()) => tracing::info!(path = %self.path.display(), "created config file"),
            Err(e) => tracing::warn!(error = %e, "could not create config file"),
        }
        config
    }

    /// Load the config. Fails only if the file is unreadable or not JSON;
    /// bad individual keys keep their defaults.
    pub fn try_load(&self) -> Result<DimConfig, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(config_from_value(&value))
    }

    /// Write the config, creating the parent directory if needed.
    pub fn save(&self, config: &DimConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json =
            serde_json::to_string_pretty(&Config::from(config)).map_err(ConfigError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

fn config_from_value(value: &Value) -> DimConfig {
    let mut config = DimConfig::default();

    match value.get(PREF_TRANSPARENCY).map(transparency_from_value) {
        Some(Some(transparency)) => config.transparency_dim = transparency,
        Some(None) => tracing::warn!(key = PREF_TRANSPARENCY, "invalid value, keeping default"),
        None => tracing::warn!(key = PREF_TRANSPARENCY, "missing, keeping default"),
    }

    match value.get(PREF_TINT).map(tint_from_value) {
        Some(Some(tint)) => config.tint = tint,
        Some(None) => tracing::warn!(key = PREF_TINT, "invalid value, keeping default"),
        None => tracing::warn!(key = PREF_TINT, "missing, keeping default"),
    }

    config
}

/// Integer or fractional number in range; fractions are truncated.
fn transparency_from_value(value: &Value) -> Option<u8> {
    if let Some(n) = value.as_u64() {
        return u8::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.is_finite() && f >= f64::from(MIN_TRANSPARENCY) && f <= f64::from(MAX_TRANSPARENCY) {
        Some(f as u8)
    } else {
        None
    }
}

fn tint_from_value(value: &Value) -> Option<TintColor> {
    let n = u32::try_from(value.as_u64()?).ok()?;
    TintColor::new(n)
}
