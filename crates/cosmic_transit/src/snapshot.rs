//! Local ten-body snapshot builder.
//!
//! The Sun here comes from the day-of-year linear model, not the date-range
//! sun sign table used for profiles. The two disagree near cusps and both
//! outputs are pinned, so they stay separate.

use cosmic_time::Instant;
use cosmic_zodiac::{ALL_PLANETS, SignPosition, moon_position, planet_position, sun_position_by_day_of_year};

use crate::body::Body;
use crate::transit_types::{TransitEntry, TransitSnapshot};

fn luminary(body: Body, pos: SignPosition) -> TransitEntry {
    TransitEntry {
        body,
        sign: pos.sign,
        degree: pos.degree,
        is_retrograde: false,
        element: pos.element(),
    }
}

/// Sun, Moon and the eight planets for `instant`, in snapshot order.
pub fn build_snapshot(instant: &Instant) -> TransitSnapshot {
    let jd = instant.julian_date();

    let mut entries = Vec::with_capacity(10);
    entries.push(luminary(Body::Sun, sun_position_by_day_of_year(instant)));
    entries.push(luminary(Body::Moon, moon_position(jd)));
    entries.extend(ALL_PLANETS.iter().map(|&planet| {
        let pos = planet_position(jd, planet);
        TransitEntry {
            body: Body::from(planet),
            sign: pos.position.sign,
            degree: pos.position.degree,
            is_retrograde: pos.is_retrograde,
            element: pos.position.element(),
        }
    }));

    TransitSnapshot::new(entries)
}
