//! Error types for instant parsing and construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or parsing an [`Instant`](crate::Instant).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real date/time (e.g. Feb 30, hour 25).
    InvalidCalendar {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    /// Text could not be parsed in any accepted format.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendar {
                year,
                month,
                day,
                hour,
                minute,
            } => write!(
                f,
                "invalid calendar instant: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ),
            Self::Parse(msg) => write!(f, "unparseable instant: {msg}"),
        }
    }
}

impl Error for TimeError {}
