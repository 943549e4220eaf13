//! Approximate Moon longitude from a single-term perturbation series.
//!
//! `L = 218.316 + 13.176396 d` is the mean longitude and
//! `M = 134.963 + 13.064993 d` the mean anomaly, with `d` days from J2000.0.
//! Only the equation-of-centre term `6.289 sin M` is applied, which is good
//! to a few degrees.

use cosmic_time::{days_since_j2000, deg_to_rad, normalize_degrees};

use crate::sign::{SignPosition, sign_position_from_longitude};

/// Mean longitude at J2000.0 (deg).
const MEAN_LONGITUDE_J2000: f64 = 218.316;
/// Mean longitude rate (deg/day).
const MEAN_LONGITUDE_RATE: f64 = 13.176_396;
/// Mean anomaly at J2000.0 (deg).
const MEAN_ANOMALY_J2000: f64 = 134.963;
/// Mean anomaly rate (deg/day).
const MEAN_ANOMALY_RATE: f64 = 13.064_993;
/// Amplitude of the equation of centre (deg).
const EQUATION_OF_CENTRE: f64 = 6.289;

/// Approximate tropical ecliptic longitude of the Moon in [0, 360).
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let d = days_since_j2000(jd);
    let l = MEAN_LONGITUDE_J2000 + MEAN_LONGITUDE_RATE * d;
    let m = MEAN_ANOMALY_J2000 + MEAN_ANOMALY_RATE * d;
    normalize_degrees(l + EQUATION_OF_CENTRE * deg_to_rad(normalize_degrees(m)).sin())
}

/// Moon sign and whole degree for a Julian Date.
pub fn moon_position(jd: f64) -> SignPosition {
    sign_position_from_longitude(moon_longitude_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ZodiacSign;
    use cosmic_time::{J2000_JD, UNIX_EPOCH_JD};

    #[test]
    fn longitude_in_range() {
        for i in -500..500 {
            let lon = moon_longitude_deg(J2000_JD + i as f64 * 3.7);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }

    #[test]
    fn j2000_position() {
        // L = 218.316, M = 134.963 -> 218.316 + 6.289 sin(134.963) = 222.766
        let lon = moon_longitude_deg(J2000_JD);
        assert!((lon - 222.7659).abs() < 1e-3, "lon = {lon}");
        let pos = moon_position(J2000_JD);
        assert_eq!(pos.sign, ZodiacSign::Scorpio);
        assert_eq!(pos.degree, 12);
    }

    #[test]
    fn unix_epoch_position() {
        let pos = moon_position(UNIX_EPOCH_JD);
        assert_eq!(pos.sign, ZodiacSign::Libra);
        assert_eq!(pos.degree, 11);
    }

    #[test]
    fn moves_roughly_a_sign_every_two_and_a_half_days() {
        let a = moon_longitude_deg(J2000_JD);
        let b = moon_longitude_deg(J2000_JD + 1.0);
        let step = normalize_degrees(b - a);
        assert!(step > 10.0 && step < 16.0, "step = {step}");
    }
}
