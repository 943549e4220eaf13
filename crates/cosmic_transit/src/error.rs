//! Error types for transit fetching and payload validation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Errors from a remote transit source or from validating its payload.
///
/// None of these reach callers of [`fetch_transits_for`](crate::fetch_transits_for);
/// they only decide (and explain) the fall back to local computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TransitError {
    /// The source could not be reached.
    Unavailable(String),
    /// No answer within the allotted time.
    Timeout(Duration),
    /// The source answered with a non-success status.
    Status(u16),
    /// The body was not a JSON list of transit entries.
    Payload(String),
    /// The body was an empty list.
    EmptyPayload,
    /// An entry carried a degree outside [0, 30) or a non-finite one.
    InvalidDegree { body: String, degree: f64 },
    /// Not one of the ten snapshot bodies.
    UnknownBody(String),
}

impl Display for TransitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "remote transit source unavailable: {msg}"),
            Self::Timeout(d) => write!(f, "remote transit source timed out after {d:?}"),
            Self::Status(code) => write!(f, "remote transit source returned status {code}"),
            Self::Payload(msg) => write!(f, "unrecognized transit payload: {msg}"),
            Self::EmptyPayload => f.write_str("transit payload is empty"),
            Self::InvalidDegree { body, degree } => {
                write!(f, "transit degree out of range for {body}: {degree}")
            }
            Self::UnknownBody(name) => write!(f, "unknown transit body: {name}"),
        }
    }
}

impl Error for TransitError {}

impl From<serde_json::Error> for TransitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e.to_string())
    }
}
