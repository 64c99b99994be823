/// Classify a magnitude into the 1..=10 display-color bucket key.
///
/// Truncates toward zero. Truncated 0 and 1 share bucket 1, 2 through 9 map
/// one-to-one, and anything truncating to 10 or more, below zero, or
/// non-finite lands in the "10 plus" bucket. The palette itself belongs to
/// the shell; only the key is derived here.
pub fn magnitude_bucket(magnitude: f64) -> u8 {
    if !magnitude.is_finite() {
        return 10;
    }
    match magnitude.trunc() as i64 {
        0 | 1 => 1,
        n @ 2..=9 => n as u8,
        _ => 10,
    }
}

/// Format a magnitude with exactly one decimal place ("6.7", "-0.3").
///
/// Uses the standard formatter, which rounds exact binary ties half to even:
/// 6.75 renders as "6.8" and 6.25 as "6.2".
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_clamp_and_map() {
        assert_eq!(magnitude_bucket(0.0), 1);
        assert_eq!(magnitude_bucket(0.9), 1);
        assert_eq!(magnitude_bucket(1.7), 1);
        assert_eq!(magnitude_bucket(2.0), 2);
        assert_eq!(magnitude_bucket(5.4), 5);
        assert_eq!(magnitude_bucket(9.9), 9);
        assert_eq!(magnitude_bucket(10.2), 10);
        assert_eq!(magnitude_bucket(12.0), 10);
    }

    #[test]
    fn small_negative_truncates_into_bucket_one() {
        // -0.3 truncates to 0, same as the legacy integer cast
        assert_eq!(magnitude_bucket(-0.3), 1);
    }

    #[test]
    fn deep_negative_and_non_finite_fall_to_ten_plus() {
        assert_eq!(magnitude_bucket(-1.5), 10);
        assert_eq!(magnitude_bucket(f64::NAN), 10);
        assert_eq!(magnitude_bucket(f64::INFINITY), 10);
    }

    #[test]
    fn one_decimal_place_formatting() {
        assert_eq!(format_magnitude(6.7), "6.7");
        assert_eq!(format_magnitude(2.1), "2.1");
        assert_eq!(format_magnitude(10.5), "10.5");
        assert_eq!(format_magnitude(-0.3), "-0.3");
        assert_eq!(format_magnitude(6.0), "6.0");
    }

    #[test]
    fn exact_ties_round_half_to_even() {
        // 6.75 and 6.25 are exactly representable, so these are true ties
        assert_eq!(format_magnitude(6.75), "6.8");
        assert_eq!(format_magnitude(6.25), "6.2");
    }
}
