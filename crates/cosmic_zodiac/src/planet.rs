//! Naive planetary positions from orbital period phase.
//!
//! Each planet's longitude is taken as `(JD mod period) / period * 360`,
//! i.e. the fraction of its sidereal period elapsed since JD 0. This has no
//! real ephemeris content; it is a deterministic placeholder that spreads the
//! planets over the zodiac at their relative speeds.
//!
//! The retrograde flag is `sin(JD / 100) < -0.8`, shared by all planets.
//! It has no astronomical basis.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZodiacError;
use crate::sign::{SignPosition, sign_position_from_longitude};

/// The eight bodies handled by the period model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All eight planets in heliocentric order.
pub const ALL_PLANETS: [Planet; 8] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

/// Threshold below which `sin(JD / 100)` flags retrograde.
const RETROGRADE_SINE_THRESHOLD: f64 = -0.8;

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
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

    /// Approximate sidereal orbital period in days.
    pub const fn orbital_period_days(self) -> f64 {
        match self {
            Self::Mercury => 87.97,
            Self::Venus => 224.7,
            Self::Mars => 686.98,
            Self::Jupiter => 4_332.59,
            Self::Saturn => 10_759.22,
            Self::Uranus => 30_688.5,
            Self::Neptune => 60_182.0,
            Self::Pluto => 90_560.0,
        }
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ZodiacError::UnknownPlanet(s.to_string()))
    }
}

/// Position and retrograde flag of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub position: SignPosition,
    pub is_retrograde: bool,
}

/// Orbital phase angle in [0, 360).
///
/// Uses the Euclidean remainder so a negative JD still lands in range;
/// for every JD >= 0 this equals the plain floating-point remainder.
pub fn planet_longitude_deg(jd: f64, planet: Planet) -> f64 {
    let period = planet.orbital_period_days();
    jd.rem_euclid(period) / period * 360.0
}

/// The shared retrograde oscillation.
pub fn is_retrograde_heuristic(jd: f64) -> bool {
    (jd / 100.0).sin() < RETROGRADE_SINE_THRESHOLD
}

/// Sign, degree and retrograde flag for `planet` at `jd`.
pub fn planet_position(jd: f64, planet: Planet) -> PlanetPosition {
    PlanetPosition {
        position: sign_position_from_longitude(planet_longitude_deg(jd, planet)),
        is_retrograde: is_retrograde_heuristic(jd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ZodiacSign;
    use cosmic_time::J2000_JD;

    #[test]
    fn periods_increase_outwards() {
        for pair in ALL_PLANETS.windows(2) {
            assert!(pair[0].orbital_period_days() < pair[1].orbital_period_days());
        }
    }

    #[test]
    fn phase_in_range() {
        for p in ALL_PLANETS {
            for jd in [0.0, 1.5, J2000_JD, 2_460_462.5, -1_000.0] {
                let lon = planet_longitude_deg(jd, p);
                assert!((0.0..360.0).contains(&lon), "{p} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn one_full_period_returns_to_start() {
        let p = Planet::Mars;
        let a = planet_longitude_deg(1_000.0, p);
        let b = planet_longitude_deg(1_000.0 + p.orbital_period_days(), p);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn j2000_mercury() {
        // 2451545 mod 87.97 = 85.01... -> 347.89 deg
        let pos = planet_position(J2000_JD, Planet::Mercury);
        assert_eq!(pos.position.sign, ZodiacSign::Pisces);
        assert_eq!(pos.position.degree, 17);
    }

    #[test]
    fn retrograde_heuristic_is_shared() {
        // sin(24515.45) = -0.9995
        assert!(is_retrograde_heuristic(J2000_JD));
        for p in ALL_PLANETS {
            assert!(planet_position(J2000_JD, p).is_retrograde);
        }
        // sin(24604.625) = -0.3228
        assert!(!is_retrograde_heuristic(2_460_462.5));
    }

    #[test]
    fn parse_names() {
        assert_eq!("jupiter".parse::<Planet>().unwrap(), Planet::Jupiter);
        assert!("Sun".parse::<Planet>().is_err());
    }
}
