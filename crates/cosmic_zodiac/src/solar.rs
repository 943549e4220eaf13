//! Day-of-year Sun longitude used by transit snapshots.
//!
//! This is a separate algorithm from the date-range table in
//! [`western`](crate::western): longitude grows linearly at the mean
//! solar rate from the vernal equinox, taken as day 80. Profiles use the
//! table, transit snapshots use this; their outputs differ near cusps.

use cosmic_time::Instant;

use crate::sign::{SignPosition, sign_position_from_longitude};

/// Day of year treated as 0 deg Aries.
const EQUINOX_DAY_OF_YEAR: f64 = 80.0;
/// Mean solar motion (deg/day).
const MEAN_SOLAR_RATE: f64 = 0.9856;

/// Linear Sun longitude for a 1-based day of year, in [0, 360).
pub fn sun_longitude_by_day_of_year(day_of_year: u32) -> f64 {
    let mut deg = (day_of_year as f64 - EQUINOX_DAY_OF_YEAR) * MEAN_SOLAR_RATE;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

/// Transit Sun sign and degree for an instant.
pub fn sun_position_by_day_of_year(instant: &Instant) -> SignPosition {
    sign_position_from_longitude(sun_longitude_by_day_of_year(instant.day_of_year()))
}
