//! Simulated rising sign.
//!
//! A real ascendant needs geographic latitude/longitude and local sidereal
//! time. This is a deliberate stand-in: the rising sign advances one sign
//! every two hours from the sun sign, anchored so that 06:00-07:59 rises in
//! the sun sign itself. Location is accepted upstream but not used here.

use cosmic_time::safe_modulo;

use crate::sign::ZodiacSign;

/// Rising sign for a sun sign and hour of day (0..=23).
///
/// `offset = floor((hour - 6) / 2)` steps through [`CALENDAR_ORDER`]
/// (Capricorn first) from the sun sign.
///
/// [`CALENDAR_ORDER`]: crate::sign::CALENDAR_ORDER
pub fn ascendant_for(sun_sign: ZodiacSign, hour: u32) -> ZodiacSign {
    let offset = (hour as i64 - 6).div_euclid(2);
    let index = safe_modulo(sun_sign.calendar_index() as i64 + offset, 12);
    ZodiacSign::from_calendar_index(index as usize)
}
