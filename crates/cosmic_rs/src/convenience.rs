//! String-input helpers for front ends.
//!
//! Each takes user text, substitutes now when it does not parse, and runs
//! one resolver.

use cosmic_time::Instant;
use cosmic_zodiac::{
    BaZiChart, Planet, PlanetPosition, SignPosition, ZodiacSign, ascendant_for, moon_position,
    planet_position, resolve_pillars, sun_sign_for_instant,
};

/// Parse `input`, or now when absent or unparseable.
pub fn instant_or_now(input: Option<&str>) -> Instant {
    match input {
        Some(s) => Instant::parse_or_now(s),
        None => Instant::now(),
    }
}

pub fn sun_sign(input: Option<&str>) -> ZodiacSign {
    sun_sign_for_instant(&instant_or_now(input))
}

pub fn moon(input: Option<&str>) -> SignPosition {
    moon_position(instant_or_now(input).julian_date())
}

pub fn planet(input: Option<&str>, planet: Planet) -> PlanetPosition {
    planet_position(instant_or_now(input).julian_date(), planet)
}

pub fn pillars(input: Option<&str>) -> BaZiChart {
    resolve_pillars(&instant_or_now(input))
}

/// Simulated ascendant from the instant's sun sign and hour.
pub fn ascendant(input: Option<&str>) -> ZodiacSign {
    let instant = instant_or_now(input);
    ascendant_for(sun_sign_for_instant(&instant), instant.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_zodiac::HeavenlyStem;

    #[test]
    fn helpers_on_reference_date() {
        let d = Some("1990-01-15T12:00");
        assert_eq!(sun_sign(d), ZodiacSign::Capricorn);
        assert_eq!(moon(d).sign, ZodiacSign::Virgo);
        assert_eq!(ascendant(d), ZodiacSign::Aries);
        assert_eq!(pillars(d).day.stem, HeavenlyStem::Jia);
    }

    #[test]
    fn mercury_at_j2000() {
        let pos = planet(Some("2000-01-01T12:00:00Z"), Planet::Mercury);
        assert_eq!(pos.position.sign, ZodiacSign::Pisces);
        assert_eq!(pos.position.degree, 17);
        assert!(pos.is_retrograde);
    }

    #[test]
    fn garbage_input_resolves_as_now() {
        let chart = pillars(Some("???"));
        assert!(chart.day.stem.index() < 10);
        assert!(chart.day.branch.index() < 12);
        let now = resolve_pillars(&Instant::now());
        // Differs only if the Feb 4 cutoff passes between the two calls.
        assert!(chart.bazi_year == now.bazi_year || chart.bazi_year + 1 == now.bazi_year);

        let pos = moon(None);
        assert!(pos.degree <= 29);
    }
}
