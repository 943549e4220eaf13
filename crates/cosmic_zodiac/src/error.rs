//! Error types for name lookups.
//!
//! The resolvers themselves are total; only parsing external names can fail.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from turning names into zodiac values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ZodiacError {
    /// Not one of the 12 tropical sign names.
    UnknownSign(String),
    /// Not one of the eight approximated planets.
    UnknownPlanet(String),
    /// Not one of Fire, Earth, Air, Water.
    UnknownElement(String),
}

impl Display for ZodiacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSign(name) => write!(f, "unknown zodiac sign: {name}"),
            Self::UnknownPlanet(name) => write!(f, "unknown planet: {name}"),
            Self::UnknownElement(name) => write!(f, "unknown element: {name}"),
        }
    }
}

impl Error for ZodiacError {}
