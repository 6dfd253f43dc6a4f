//! Rounding and amount formatting

/// Round to the nearest multiple of 1000.
///
/// Ties go to the even multiple (`1_500.0 -> 2_000.0`, `2_500.0 -> 2_000.0`).
pub fn round_to_thousand(value: f64) -> f64 {
    (value / 1000.0).round_ties_even() * 1000.0
}

/// Round to `decimals` decimal places (half away from zero)
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Whole-unit amount with comma thousands separators: `1452000.0 -> "1,452,000"`
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_thousand_ties_even() {
        assert_eq!(round_to_thousand(1_452_000.0000001), 1_452_000.0);
        assert_eq!(round_to_thousand(1_500.0), 2_000.0);
        assert_eq!(round_to_thousand(2_500.0), 2_000.0);
        assert_eq!(round_to_thousand(2_501.0), 3_000.0);
    }

    #[test]
    fn test_round_to_thousand_idempotent() {
        for v in [0.0, 999.0, 12_345.6, 987_654.3] {
            let once = round_to_thousand(v);
            assert_eq!(round_to_thousand(once), once);
        }
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(0.8799999, 2), 0.88);
        assert_eq!(round_dp(3.14159, 1), 3.1);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_452_000.0), "1,452,000");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(-12_000.0), "-12,000");
        assert_eq!(format_amount(0.0), "0");
    }
}
