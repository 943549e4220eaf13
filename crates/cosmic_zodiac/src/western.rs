//! Date-range sun sign table.
//!
//! The boundaries are the conventional tropical date ranges, inclusive on
//! both ends. They are a literal contract: Dec 21 is Sagittarius and Dec 22
//! is Capricorn regardless of the year's actual solstice time.

use cosmic_time::Instant;

use crate::sign::ZodiacSign;

/// One row of the sun sign table: the sign owns `start` (month, day)
/// through the end of `start`'s month, plus the start of `end`'s month
/// through `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunSignRange {
    pub sign: ZodiacSign,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl SunSignRange {
    /// Whether `(month, day)` falls in this range.
    pub const fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

const fn range(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> SunSignRange {
    SunSignRange { sign, start, end }
}

/// The table, in calendar order (Capricorn first).
pub const SUN_SIGN_RANGES: [SunSignRange; 12] = [
    range(ZodiacSign::Capricorn, (12, 22), (1, 19)),
    range(ZodiacSign::Aquarius, (1, 20), (2, 18)),
    range(ZodiacSign::Pisces, (2, 19), (3, 20)),
    range(ZodiacSign::Aries, (3, 21), (4, 19)),
    range(ZodiacSign::Taurus, (4, 20), (5, 20)),
    range(ZodiacSign::Gemini, (5, 21), (6, 20)),
    range(ZodiacSign::Cancer, (6, 21), (7, 22)),
    range(ZodiacSign::Leo, (7, 23), (8, 22)),
    range(ZodiacSign::Virgo, (8, 23), (9, 22)),
    range(ZodiacSign::Libra, (9, 23), (10, 22)),
    range(ZodiacSign::Scorpio, (10, 23), (11, 21)),
    range(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
];

/// Sun sign for a calendar (month 1-12, day) pair.
///
/// Falls back to Aries when nothing matches, which only happens for
/// out-of-range input.
pub fn sun_sign_for(month: u32, day: u32) -> ZodiacSign {
    SUN_SIGN_RANGES
        .iter()
        .find(|r| r.contains(month, day))
        .map_or(ZodiacSign::Aries, |r| r.sign)
}

/// Sun sign for an instant's calendar date.
pub fn sun_sign_for_instant(instant: &Instant) -> ZodiacSign {
    sun_sign_for(instant.month(), instant.day())
}
