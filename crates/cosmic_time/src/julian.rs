//! Julian Date conversion from Unix time.
//!
//! The engine only ever needs the simple linear mapping
//! `JD = unix_ms / 86_400_000 + 2_440_587.5`; there is no leap-second or
//! TT/TDB correction at this precision level.

/// Julian Date of the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Milliseconds per civil day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert Unix milliseconds to a Julian Date.
///
/// Non-finite input (NaN or infinite) yields [`UNIX_EPOCH_JD`] so a
/// corrupted timestamp can never leak NaN into the resolvers.
pub fn jd_from_unix_millis(unix_ms: f64) -> f64 {
    if !unix_ms.is_finite() {
        return UNIX_EPOCH_JD;
    }
    unix_ms / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Days elapsed since J2000.0 for the given Julian Date.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}
