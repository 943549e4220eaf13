//! Explicit session context.
//!
//! A [`Session`] holds the configuration and the optional remote transit
//! source. Handlers receive it by reference; nothing is global.

use std::fmt;

use cosmic_config::CosmicConfig;
use cosmic_fusion::{BirthData, FusionResult, SymbolConfig, SymbolRequest, build_symbol_prompt, run_fusion_analysis};
use cosmic_time::Instant;
use cosmic_transit::{RemoteTransitSource, TransitFetch, fetch_transits_for, transit_query};

/// Path of the remote symbol endpoint.
pub const SYMBOL_PATH: &str = "/api/symbol";

pub struct Session {
    config: CosmicConfig,
    transit_source: Option<Box<dyn RemoteTransitSource>>,
}

impl Session {
    pub fn new(config: CosmicConfig) -> Self {
        Self {
            config,
            transit_source: None,
        }
    }

    /// Attach the source consulted before local transit computation.
    pub fn with_transit_source<S>(mut self, source: S) -> Self
    where
        S: RemoteTransitSource + 'static,
    {
        self.transit_source = Some(Box::new(source));
        self
    }

    pub fn config(&self) -> &CosmicConfig {
        &self.config
    }

    /// The remote source, if one is attached and remote use is enabled.
    fn remote(&self) -> Option<&dyn RemoteTransitSource> {
        if !self.config.remote.enabled {
            return None;
        }
        self.transit_source.as_deref()
    }

    pub fn analyze(&self, data: &BirthData) -> FusionResult {
        run_fusion_analysis(data)
    }

    /// Transits at `instant` (now when `None`).
    pub fn transits_for(&self, instant: Option<Instant>) -> TransitFetch {
        fetch_transits_for(instant, self.remote(), self.config.remote.transit_timeout())
    }

    /// Transits for a date string; unparseable input means now.
    pub fn transits_for_str(&self, input: &str) -> TransitFetch {
        let instant = Instant::parse(input)
            .map_err(|e| tracing::warn!(input, error = %e, "invalid transit date, substituting now"))
            .ok();
        self.transits_for(instant)
    }

    pub fn current_transits(&self) -> TransitFetch {
        self.transits_for(Some(Instant::now()))
    }

    /// The weighting to use: `config`, else the session default.
    pub fn symbol_config(&self, config: Option<SymbolConfig>) -> SymbolConfig {
        config.unwrap_or(self.config.symbol)
    }

    /// Fusion prompt with the effective weighting applied.
    pub fn symbol_prompt(&self, result: &FusionResult, config: Option<SymbolConfig>) -> String {
        let config = self.symbol_config(config);
        build_symbol_prompt(&result.prompt, Some(&config))
    }

    /// Remote symbol payload with the effective weighting.
    pub fn symbol_request(&self, result: &FusionResult, config: Option<SymbolConfig>) -> SymbolRequest {
        let config = self.symbol_config(config);
        SymbolRequest::new(result.prompt.clone(), Some(&config))
    }

    /// Full remote transit URL for `instant`.
    pub fn transit_url(&self, instant: &Instant) -> String {
        self.config.remote.bazi_endpoint(&transit_query(instant))
    }

    pub fn symbol_url(&self) -> String {
        self.config.remote.bazi_endpoint(SYMBOL_PATH)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CosmicConfig::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("transit_source", &self.transit_source.is_some())
            .finish()
    }
}
