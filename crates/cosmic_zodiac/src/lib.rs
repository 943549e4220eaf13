//! Deterministic date-to-sign resolvers for Western and Ba Zi astrology.
//!
//! This crate provides:
//! - Tropical sun sign from a fixed date-range table
//! - Simulated ascendant from sun sign and hour of day
//! - Approximate Moon longitude (single perturbation term)
//! - Orbital-period planet phases with a retrograde heuristic
//! - Day-of-year Sun longitude for transit snapshots
//! - Ba Zi year/month/day pillars on the sexagenary cycle
//!
//! None of these are ephemeris-grade; they are simplified periodic models
//! whose exact outputs are pinned by tests. Every function is pure.

pub mod ascendant;
pub mod bazi;
pub mod element;
pub mod error;
pub mod lunar;
pub mod planet;
pub mod sexagenary;
pub mod sign;
pub mod solar;
pub mod western;

pub use ascendant::ascendant_for;
pub use bazi::{
    BaZiChart, Pillar, bazi_year, day_pillar, day_pillar_from_epoch_days, month_branch,
    resolve_pillars, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Polarity, WuXing};
pub use error::ZodiacError;
pub use lunar::{moon_longitude_deg, moon_position};
pub use planet::{
    ALL_PLANETS, Planet, PlanetPosition, is_retrograde_heuristic, planet_longitude_deg,
    planet_position,
};
pub use sexagenary::{ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem};
pub use sign::{
    ASTRONOMICAL_ORDER, CALENDAR_ORDER, SignPosition, ZodiacSign, sign_position_from_longitude,
};
pub use solar::{sun_longitude_by_day_of_year, sun_position_by_day_of_year};
pub use western::{SUN_SIGN_RANGES, SunSignRange, sun_sign_for, sun_sign_for_instant};
