//! Remote engine endpoints and timeouts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ENGINE_URL: &str = "https://cosmic-cloud-engine.fly.dev";
pub const DEFAULT_BAZI_ENGINE_URL: &str = "https://baziengine-v2.fly.dev";
pub const DEFAULT_TRANSIT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_SYMBOL_TIMEOUT_MS: u64 = 8_000;

/// Where the remote engines live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// When false, every request is computed locally.
    pub enabled: bool,
    /// Cosmic cloud engine base URL.
    pub engine_url: String,
    /// Base URL serving `/api/transits` and `/api/symbol`.
    pub bazi_engine_url: String,
    pub transit_timeout_ms: u64,
    pub symbol_timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            bazi_engine_url: DEFAULT_BAZI_ENGINE_URL.to_string(),
            transit_timeout_ms: DEFAULT_TRANSIT_TIMEOUT_MS,
            symbol_timeout_ms: DEFAULT_SYMBOL_TIMEOUT_MS,
        }
    }
}

impl RemoteConfig {
    /// `path` resolved against the cosmic engine URL.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.engine_url, path)
    }

    /// `path` resolved against the Ba Zi engine URL.
    pub fn bazi_endpoint(&self, path: &str) -> String {
        join_url(&self.bazi_engine_url, path)
    }

    pub fn transit_timeout(&self) -> Duration {
        Duration::from_millis(self.transit_timeout_ms)
    }

    pub fn symbol_timeout(&self) -> Duration {
        Duration::from_millis(self.symbol_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("engine_url", &self.engine_url),
            ("bazi_engine_url", &self.bazi_engine_url),
        ] {
            if !is_http_url(url) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.transit_timeout_ms == 0 || self.symbol_timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeouts must be positive".to_string()));
        }
        Ok(())
    }
}

fn is_http_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

/// Resolve `path` against `base` the way a browser resolves a relative
/// reference: absolute URLs win, `/`-rooted paths replace the base path,
/// anything else replaces the last base segment.
pub fn join_url(base: &str, path: &str) -> String {
    if is_http_url(path) {
        return path.to_string();
    }
    let authority_start = base.find("://").map_or(0, |i| i + 3);
    let path_start = base[authority_start..]
        .find('/')
        .map_or(base.len(), |i| authority_start + i);
    let origin = &base[..path_start];

    if let Some(rooted) = path.strip_prefix('/') {
        return format!("{origin}/{rooted}");
    }
    let base_path = &base[path_start..];
    let dir = base_path.rfind('/').map_or("", |i| &base_path[..i]);
    format!("{origin}{dir}/{path}")
}
