//! Runtime configuration for the cosmic engine.
//!
//! A [`CosmicConfig`] is loaded from a JSON file where every field is
//! optional, then adjusted by environment overrides:
//!
//! | Variable | Field |
//! |---|---|
//! | `COSMIC_ENGINE_URL` | `remote.engine_url` |
//! | `COSMIC_BAZI_ENGINE_URL` | `remote.bazi_engine_url` |
//! | `COSMIC_REMOTE_ENABLED` | `remote.enabled` (`0`/`false`/`off` disable) |
//!
//! Overrides go through a lookup function so callers (and tests) decide
//! where the values come from.

pub mod error;
pub mod remote;

use std::fs;
use std::path::Path;

use cosmic_fusion::SymbolConfig;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use remote::{
    DEFAULT_BAZI_ENGINE_URL, DEFAULT_ENGINE_URL, DEFAULT_SYMBOL_TIMEOUT_MS,
    DEFAULT_TRANSIT_TIMEOUT_MS, RemoteConfig, join_url,
};

pub const ENV_ENGINE_URL: &str = "COSMIC_ENGINE_URL";
pub const ENV_BAZI_ENGINE_URL: &str = "COSMIC_BAZI_ENGINE_URL";
pub const ENV_REMOTE_ENABLED: &str = "COSMIC_REMOTE_ENABLED";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmicConfig {
    pub remote: RemoteConfig,
    /// Weighting used when a symbol request carries none.
    pub symbol: SymbolConfig,
}

impl CosmicConfig {
    /// Parse from JSON text; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `load(path)` when a path is given, defaults otherwise; then
    /// process-environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` and re-validate.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_ENGINE_URL).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(%url, "engine URL overridden from environment");
            self.remote.engine_url = url.trim().to_string();
        }
        if let Some(url) = lookup(ENV_BAZI_ENGINE_URL).filter(|v| !v.trim().is_empty()) {
            self.remote.bazi_engine_url = url.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_REMOTE_ENABLED) {
            self.remote.enabled = parse_flag(&flag).ok_or_else(|| {
                ConfigError::Invalid(format!("{ENV_REMOTE_ENABLED} must be a boolean, got {flag:?}"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.remote.validate()
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
