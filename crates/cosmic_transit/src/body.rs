//! The ten bodies of a transit snapshot.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use cosmic_zodiac::Planet;
use serde::{Deserialize, Serialize};

use crate::error::TransitError;

/// Sun, Moon and the eight period-model planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Fixed snapshot order: luminaries first, then planets outward.
pub const SNAPSHOT_ORDER: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based position in [`SNAPSHOT_ORDER`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// The period-model planet for this body, `None` for the luminaries.
    pub const fn planet(self) -> Option<Planet> {
        match self {
            Self::Sun | Self::Moon => None,
            Self::Mercury => Some(Planet::Mercury),
            Self::Venus => Some(Planet::Venus),
            Self::Mars => Some(Planet::Mars),
            Self::Jupiter => Some(Planet::Jupiter),
            Self::Saturn => Some(Planet::Saturn),
            Self::Uranus => Some(Planet::Uranus),
            Self::Neptune => Some(Planet::Neptune),
            Self::Pluto => Some(Planet::Pluto),
        }
    }
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        match planet {
            Planet::Mercury => Self::Mercury,
            Planet::Venus => Self::Venus,
            Planet::Mars => Self::Mars,
            Planet::Jupiter => Self::Jupiter,
            Planet::Saturn => Self::Saturn,
            Planet::Uranus => Self::Uranus,
            Planet::Neptune => Self::Neptune,
            Planet::Pluto => Self::Pluto,
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SNAPSHOT_ORDER
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TransitError::UnknownBody(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_zodiac::ALL_PLANETS;

    #[test]
    fn order_matches_index() {
        for (i, b) in SNAPSHOT_ORDER.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn planets_follow_luminaries() {
        let planets: Vec<Body> = ALL_PLANETS.iter().map(|p| Body::from(*p)).collect();
        assert_eq!(&SNAPSHOT_ORDER[2..], planets.as_slice());
        assert_eq!(Body::Sun.planet(), None);
        assert_eq!(Body::Pluto.planet(), Some(Planet::Pluto));
    }

    #[test]
    fn parse_names() {
        assert_eq!("moon".parse::<Body>().unwrap(), Body::Moon);
        assert_eq!(" Saturn ".parse::<Body>().unwrap(), Body::Saturn);
        assert!(matches!(
            "Chiron".parse::<Body>(),
            Err(TransitError::UnknownBody(_))
        ));
    }
}
