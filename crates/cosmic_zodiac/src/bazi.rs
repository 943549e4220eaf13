//! Ba Zi (Four Pillars) year, month and day pillars.
//!
//! Three independent computations, none of which uses solar-term ephemeris:
//! - Year: rolls over on a fixed Feb 4 cutoff, then indexes the sexagenary
//!   cycle from CE 4 (a Jia-Zi year).
//! - Month: a fixed table of approximate solar-term start days decides
//!   whether the calendar month's branch or the previous month's applies.
//! - Day: whole days since 1900-01-01 offset into the stem/branch cycles.
//!
//! The hour pillar is not computed. Results for dates far from the present
//! (pre-1900, far future) are accepted approximations.

use std::fmt::{Display, Formatter};

use cosmic_time::{Instant, safe_modulo};
use serde::{Deserialize, Serialize};

use crate::element::{Polarity, WuXing};
use crate::sexagenary::{EarthlyBranch, HeavenlyStem};

/// Day of February on which the Ba Zi year begins.
pub const YEAR_CUTOFF_FEB_DAY: u32 = 4;

/// CE year whose stem and branch are both index 0 (Jia-Zi).
pub const SEXAGENARY_REFERENCE_YEAR: i32 = 4;

/// Approximate day-of-month each month's solar term starts (Jan..Dec).
pub const SOLAR_TERM_START_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Branch index ruling each calendar month once its solar term has begun
/// (Jan..Dec). February opens the Tiger (Yin, index 2) month.
pub const SOLAR_MONTH_BRANCHES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];

/// Proleptic Gregorian day number of 1900-01-01, the day-pillar epoch.
pub const DAY_PILLAR_EPOCH_DAYS_FROM_CE: i64 = 693_596;

/// Stem index on the epoch day.
pub const DAY_STEM_OFFSET: i64 = 4;

/// Branch index on the epoch day.
pub const DAY_BRANCH_OFFSET: i64 = 10;

/// A (stem, branch) pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Phase of the stem.
    pub fn element(&self) -> WuXing {
        self.stem.element()
    }

    /// Polarity of the stem.
    pub fn polarity(&self) -> Polarity {
        self.stem.polarity()
    }

    /// Position (0..60) in the sexagenary cycle.
    pub fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        // Solve i = s (mod 10), i = b (mod 12); (b - s) is always even.
        safe_modulo(s + 10 * safe_modulo((b - s) / 2 * 5, 6), 60) as u8
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} {})", self.stem, self.branch, self.element(), self.branch.animal())
    }
}

/// Year, month and day pillars of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaZiChart {
    /// Calendar year after the Feb 4 rollover adjustment.
    pub bazi_year: i32,
    pub year: Pillar,
    /// Only the branch of the month pillar is derived.
    pub month_branch: EarthlyBranch,
    pub day: Pillar,
}

impl BaZiChart {
    /// Day master: the phase of the day stem.
    pub fn day_master(&self) -> WuXing {
        self.day.element()
    }

    pub fn day_polarity(&self) -> Polarity {
        self.day.polarity()
    }
}

/// Ba Zi year for a calendar date: dates before Feb 4 belong to the
/// previous year.
pub fn bazi_year(year: i32, month: u32, day: u32) -> i32 {
    if month < 2 || (month == 2 && day < YEAR_CUTOFF_FEB_DAY) {
        year - 1
    } else {
        year
    }
}

/// Year pillar of a Ba Zi year.
pub fn year_pillar(bazi_year: i32) -> Pillar {
    let offset = (bazi_year - SEXAGENARY_REFERENCE_YEAR) as i64;
    Pillar {
        stem: HeavenlyStem::from_index(safe_modulo(offset, 10) as usize),
        branch: EarthlyBranch::from_index(safe_modulo(offset, 12) as usize),
    }
}

/// Month branch for a calendar (month 1-12, day) pair.
pub fn month_branch(month: u32, day: u32) -> EarthlyBranch {
    let month_idx = safe_modulo(month as i64 - 1, 12) as usize;
    let idx = if day >= SOLAR_TERM_START_DAYS[month_idx] {
        month_idx
    } else {
        (month_idx + 11) % 12
    };
    EarthlyBranch::from_index(SOLAR_MONTH_BRANCHES[idx] as usize)
}

/// Day pillar from the number of whole days since 1900-01-01.
pub fn day_pillar_from_epoch_days(days: i64) -> Pillar {
    Pillar {
        stem: HeavenlyStem::from_index(safe_modulo(DAY_STEM_OFFSET + days, 10) as usize),
        branch: EarthlyBranch::from_index(safe_modulo(DAY_BRANCH_OFFSET + days, 12) as usize),
    }
}

/// Day pillar of an instant's calendar date.
pub fn day_pillar(instant: &Instant) -> Pillar {
    day_pillar_from_epoch_days(instant.days_from_ce() - DAY_PILLAR_EPOCH_DAYS_FROM_CE)
}

/// Year, month and day pillars of an instant.
pub fn resolve_pillars(instant: &Instant) -> BaZiChart {
    let by = bazi_year(instant.year(), instant.month(), instant.day());
    BaZiChart {
        bazi_year: by,
        year: year_pillar(by),
        month_branch: month_branch(instant.month(), instant.day()),
        day: day_pillar(instant),
    }
}
