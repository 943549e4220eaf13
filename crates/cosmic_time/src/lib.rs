//! Calendar arithmetic shared by every resolver in the workspace.
//!
//! This crate provides:
//! - [`Instant`], a validated naive calendar instant with "now" substitution
//! - Unix-time to Julian Date conversion with a NaN-proof fallback
//! - Degree normalization and non-negative cyclic modulo

pub mod cycle;
pub mod error;
pub mod instant;
pub mod julian;

pub use cycle::{deg_to_rad, normalize_degrees, safe_modulo};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD, days_since_j2000, jd_from_unix_millis};
