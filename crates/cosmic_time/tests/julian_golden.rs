//! Golden values for instant parsing and Julian Date conversion.

use cosmic_time::{Instant, J2000_JD, UNIX_EPOCH_JD, jd_from_unix_millis};

#[test]
fn transit_reference_instant() {
    // 2024-06-01T00:00:00Z = 1_717_200_000_000 ms
    let t = Instant::parse("2024-06-01T00:00:00Z").unwrap();
    assert_eq!(t.unix_millis(), 1_717_200_000_000);
    assert!((t.julian_date() - 2_460_462.5).abs() < 1e-9);
}

#[test]
fn birth_reference_instant() {
    let t = Instant::from_birth_fields("1990-01-15", "12:00").unwrap();
    assert!((t.julian_date() - 2_447_907.0).abs() < 1e-9);
}

#[test]
fn j2000_noon() {
    let t = Instant::from_calendar(2000, 1, 1, 12, 0).unwrap();
    assert!((t.julian_date() - J2000_JD).abs() < 1e-9);
}

#[test]
fn pre_1970_instants_are_supported() {
    let t = Instant::from_calendar(1900, 1, 1, 0, 0).unwrap();
    // JD 2415020.5 is 1900-01-01T00:00
    assert!((t.julian_date() - 2_415_020.5).abs() < 1e-9);
}

#[test]
fn corrupted_millis_never_produce_nan() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let jd = jd_from_unix_millis(bad);
        assert!(jd.is_finite());
        assert_eq!(jd, UNIX_EPOCH_JD);
    }
}

#[test]
fn day_of_year_sweep() {
    let cases = [
        ((2024, 1, 1), 1),
        ((2024, 3, 1), 61),
        ((2023, 3, 1), 60),
        ((2024, 6, 1), 153),
        ((2024, 12, 31), 366),
        ((2023, 12, 31), 365),
    ];
    for ((y, m, d), doy) in cases {
        let t = Instant::from_calendar(y, m, d, 23, 59).unwrap();
        assert_eq!(t.day_of_year(), doy, "{y}-{m}-{d}");
    }
}
