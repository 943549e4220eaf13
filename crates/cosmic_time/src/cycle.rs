//! Angle normalization and cyclic index arithmetic.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose shifted remainder rounds up to 360.0 map to 0.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Remainder of `n` modulo `m`, always in `[0, m)`.
///
/// Stem/branch arithmetic subtracts a reference year or day count and
/// regularly goes negative; a plain `%` would hand back a negative index.
/// `m` must be positive.
pub fn safe_modulo(n: i64, m: i64) -> i64 {
    debug_assert!(m > 0, "modulus must be positive, got {m}");
    n.rem_euclid(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_degrees(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_degrees(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_degrees(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_degrees(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        for deg in [-1e-14, -1e-300, -f64::MIN_POSITIVE] {
            let r = normalize_degrees(deg);
            assert!((0.0..360.0).contains(&r), "{deg} -> {r}");
        }
    }

    #[test]
    fn radians_of_half_turn() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn modulo_positive() {
        assert_eq!(safe_modulo(23, 10), 3);
        assert_eq!(safe_modulo(24, 12), 0);
    }

    #[test]
    fn modulo_negative_stays_in_range() {
        assert_eq!(safe_modulo(-1, 10), 9);
        assert_eq!(safe_modulo(-13, 12), 11);
        assert_eq!(safe_modulo(-12, 12), 0);
    }
}
