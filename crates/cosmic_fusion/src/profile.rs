//! Birth data and the Western / Eastern profiles derived from it.

use cosmic_time::Instant;
use cosmic_zodiac::{
    EarthlyBranch, Element, HeavenlyStem, Polarity, WuXing, ZodiacSign, ascendant_for,
    moon_position, resolve_pillars, sun_sign_for_instant,
};
use serde::{Deserialize, Serialize};

/// Form input: separate date and time fields plus a free-text location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BirthData {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, may be empty
    pub time: String,
    /// Accepted for display only; no calculation uses it.
    #[serde(default)]
    pub location: String,
}

impl BirthData {
    pub fn new(date: impl Into<String>, time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    /// The birth instant, or now if the fields do not parse.
    pub fn instant(&self) -> Instant {
        Instant::from_birth_fields_or_now(&self.date, &self.time)
    }
}

/// Sun, Moon and rising signs. `element` is always the Sun sign's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WesternProfile {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub ascendant: ZodiacSign,
    pub element: Element,
}

/// Year animal and phase, month animal, and day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasternProfile {
    #[serde(with = "animal_name")]
    pub year_animal: EarthlyBranch,
    pub year_element: WuXing,
    #[serde(with = "animal_name")]
    pub month_animal: EarthlyBranch,
    pub day_element: WuXing,
    pub day_stem: HeavenlyStem,
    pub day_polarity: Polarity,
}

/// Western profile for `instant`.
pub fn western_profile(instant: &Instant) -> WesternProfile {
    let sun_sign = sun_sign_for_instant(instant);
    WesternProfile {
        sun_sign,
        moon_sign: moon_position(instant.julian_date()).sign,
        ascendant: ascendant_for(sun_sign, instant.hour()),
        element: sun_sign.element(),
    }
}

/// Eastern profile for `instant`.
pub fn eastern_profile(instant: &Instant) -> EasternProfile {
    let chart = resolve_pillars(instant);
    EasternProfile {
        year_animal: chart.year.branch,
        year_element: chart.year.element(),
        month_animal: chart.month_branch,
        day_element: chart.day_master(),
        day_stem: chart.day.stem,
        day_polarity: chart.day_polarity(),
    }
}

/// Branches travel as their animal names ("Dragon"), not pinyin.
mod animal_name {
    use cosmic_zodiac::EarthlyBranch;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(branch: &EarthlyBranch, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(branch.animal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<EarthlyBranch, D::Error> {
        let name = String::deserialize(d)?;
        EarthlyBranch::from_animal(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown zodiac animal: {name}")))
    }
}
