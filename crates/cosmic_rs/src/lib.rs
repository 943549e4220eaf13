//! Convenience wrapper for the cosmic fusion engine.
//!
//! Provides a [`Session`] context object plus string-input helpers, so
//! callers need only `use cosmic_rs::*`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cosmic_rs::*;
//!
//! let session = Session::new(CosmicConfig::default());
//! let result = session.analyze(&BirthData::new("1990-01-15", "12:00", "Berlin"));
//! println!("{}: {}", result.synthesis_title, result.element_matrix);
//!
//! for entry in session.current_transits().snapshot.iter() {
//!     println!("{entry}");
//! }
//! ```

pub mod convenience;
pub mod session;

pub use convenience::{ascendant, instant_or_now, moon, pillars, planet, sun_sign};
pub use session::{SYMBOL_PATH, Session};

// Re-export the value types so front ends need only this crate.
pub use cosmic_config::{ConfigError, CosmicConfig, RemoteConfig};
pub use cosmic_fusion::{
    Archetype, BirthData, EasternProfile, FusionResult, Influence, SymbolConfig, SymbolMode,
    SymbolRequest, WesternProfile, build_symbol_prompt,
};
pub use cosmic_time::{Instant, TimeError};
pub use cosmic_transit::{
    Body, RemoteTransitSource, TransitEntry, TransitError, TransitFetch, TransitOrigin,
    TransitSnapshot,
};
pub use cosmic_zodiac::{
    BaZiChart, EarthlyBranch, Element, HeavenlyStem, Pillar, Planet, PlanetPosition, Polarity,
    SignPosition, WuXing, ZodiacSign, ascendant_for,
};
