//! Naive wall-clock instant used as the input to every resolver.
//!
//! An [`Instant`] carries calendar fields only; no timezone is modelled.
//! Construction validates the calendar, so every resolver downstream can
//! assume real dates. Invalid or unparseable input is replaced by
//! [`Instant::now`] at the boundary via the `*_or_now` constructors.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::jd_from_unix_millis;

/// Naive date-time formats accepted after RFC 3339 fails.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A calendar instant (year, month 1-12, day, hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Build from calendar fields, rejecting impossible dates and times.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .map(Self)
            .ok_or(TimeError::InvalidCalendar {
                year,
                month,
                day,
                hour,
                minute,
            })
    }

    /// Wrap an already-valid chrono value.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Current UTC wall clock.
    pub fn now() -> Self {
        Self(Utc::now().naive_utc())
    }

    /// Parse an RFC 3339 timestamp (offsets are folded into UTC), a naive
    /// `YYYY-MM-DDTHH:MM[:SS]` / `YYYY-MM-DD HH:MM[:SS]` string, or a bare
    /// `YYYY-MM-DD` date (midnight).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }
        let naive = s.strip_suffix('Z').unwrap_or(s);
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
                return Ok(Self(dt));
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(Self(dt));
            }
        }
        Err(TimeError::Parse(s.to_string()))
    }

    /// Parse the separate date (`YYYY-MM-DD`) and time (`HH:MM[:SS]`) fields
    /// of a birth-data form.
    pub fn from_birth_fields(date: &str, time: &str) -> Result<Self, TimeError> {
        let time = time.trim();
        if time.is_empty() {
            return Self::parse(date);
        }
        Self::parse(&format!("{}T{}", date.trim(), time))
    }

    /// [`Instant::parse`], substituting now on failure.
    pub fn parse_or_now(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            tracing::warn!(input = s, error = %e, "invalid instant, substituting now");
            Self::now()
        })
    }

    /// [`Instant::from_birth_fields`], substituting now on failure.
    pub fn from_birth_fields_or_now(date: &str, time: &str) -> Self {
        Self::from_birth_fields(date, time).unwrap_or_else(|e| {
            tracing::warn!(date, time, error = %e, "invalid birth instant, substituting now");
            Self::now()
        })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month 1..=12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// 1-based day of the year (Jan 1 = 1).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// The calendar date part.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Proleptic Gregorian day number of this instant's date
    /// (0001-01-01 = 1). Differences between two day numbers are whole
    /// midnight-to-midnight day counts.
    pub fn days_from_ce(&self) -> i64 {
        self.0.num_days_from_ce() as i64
    }

    /// Milliseconds since the Unix epoch, reading the fields as UTC.
    pub fn unix_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// Julian Date, reading the fields as UTC.
    pub fn julian_date(&self) -> f64 {
        jd_from_unix_millis(self.unix_millis() as f64)
    }

    /// `YYYY-MM-DDTHH:MM:SS.sssZ`, the fields read as UTC.
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// The wrapped chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}
