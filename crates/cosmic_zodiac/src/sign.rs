//! Tropical zodiac signs, their elements and longitude-to-sign mapping.
//!
//! Two sign orderings coexist and are deliberately kept apart:
//! - [`ASTRONOMICAL_ORDER`] starts at Aries (0 deg ecliptic longitude) and is
//!   what the lunar, planetary and transit-Sun resolvers index into.
//! - [`CALENDAR_ORDER`] starts at Capricorn, the first sign of the calendar
//!   year, and is what the date-range sun sign table and the simulated
//!   ascendant index into.
//!
//! Each resolver's index arithmetic is calibrated to its own ordering.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::ZodiacError;

/// The 12 tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in ecliptic order, 0 = Aries at 0 deg.
pub const ASTRONOMICAL_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Signs in calendar-year order, 0 = Capricorn.
pub const CALENDAR_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}",
            Self::Taurus => "\u{2649}",
            Self::Gemini => "\u{264A}",
            Self::Cancer => "\u{264B}",
            Self::Leo => "\u{264C}",
            Self::Virgo => "\u{264D}",
            Self::Libra => "\u{264E}",
            Self::Scorpio => "\u{264F}",
            Self::Sagittarius => "\u{2650}",
            Self::Capricorn => "\u{2651}",
            Self::Aquarius => "\u{2652}",
            Self::Pisces => "\u{2653}",
        }
    }

    /// Element by triplicity: three signs per element.
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// 0-based index into [`ASTRONOMICAL_ORDER`] (Aries=0 .. Pisces=11).
    pub const fn astronomical_index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// 0-based index into [`CALENDAR_ORDER`] (Capricorn=0 .. Sagittarius=11).
    pub const fn calendar_index(self) -> u8 {
        (self.astronomical_index() + 3) % 12
    }

    /// Sign at `index` in [`ASTRONOMICAL_ORDER`], wrapping modulo 12.
    pub const fn from_astronomical_index(index: usize) -> Self {
        ASTRONOMICAL_ORDER[index % 12]
    }

    /// Sign at `index` in [`CALENDAR_ORDER`], wrapping modulo 12.
    pub const fn from_calendar_index(index: usize) -> Self {
        CALENDAR_ORDER[index % 12]
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ZodiacError;

    /// Case-insensitive English sign name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ASTRONOMICAL_ORDER
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ZodiacError::UnknownSign(s.to_string()))
    }
}

/// A sign plus the whole degree (0..=29) reached within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    pub degree: u8,
}

impl SignPosition {
    pub fn element(&self) -> Element {
        self.sign.element()
    }
}

impl Display for SignPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}\u{b0}", self.sign, self.degree)
    }
}

/// Map an ecliptic longitude (degrees, any range) onto [`ASTRONOMICAL_ORDER`].
pub fn sign_position_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = cosmic_time::normalize_degrees(lon_deg);
    let sign_idx = (lon / 30.0).floor() as usize;
    let degree = ((lon % 30.0).floor() as u8).min(29);
    SignPosition {
        // from_astronomical_index wraps modulo 12
        sign: ZodiacSign::from_astronomical_index(sign_idx),
        degree,
    }
}
