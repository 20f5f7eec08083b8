//! Display formatting for scaled quantities

/// Format a value with exactly one decimal place
///
/// Rounds to the nearest one-decimal value of the exact binary number.
/// Exact ties (only possible for odd multiples of 0.25) round away from
/// zero, so 0.25 gives "0.3" and 1.25 gives "1.3".
pub fn to_fixed_1(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Normalise -0.0 so it never prints a sign
    let value = if value == 0.0 { 0.0 } else { value };

    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    let value = if is_tie { (value * 10.0).round() / 10.0 } else { value };

    format!("{:.1}", value)
}

/// Strip trailing fractional zeros and a dangling decimal point
///
/// Strings without a decimal point are returned unchanged.
pub fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a scaled quantity for display
///
/// Whole values print without decimals; anything else is rounded to one
/// decimal place and a trailing ".0" is dropped.
pub fn format_quantity(value: f64) -> String {
    if value % 1.0 == 0.0 {
        let value = if value == 0.0 { 0.0 } else { value };
        return format!("{}", value);
    }
    trim_trailing_zeros(&to_fixed_1(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_1_basic() {
        assert_eq!(to_fixed_1(1.0), "1.0");
        assert_eq!(to_fixed_1(16.6), "16.6");
        assert_eq!(to_fixed_1(249.0 / 15.0), "16.6");
        assert_eq!(to_fixed_1(14.0 / 5.0), "2.8");
        assert_eq!(to_fixed_1(1.04), "1.0");
    }

    #[test]
    fn test_to_fixed_1_ties_round_away_from_zero() {
        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(0.75), "0.8");
        assert_eq!(to_fixed_1(1.25), "1.3");
        assert_eq!(to_fixed_1(-0.25), "-0.3");
    }

    #[test]
    fn test_to_fixed_1_non_tie_uses_binary_value() {
        // 0.15 is stored slightly below 0.15
        assert_eq!(to_fixed_1(0.15), "0.1");
        // 0.35 is stored slightly below 0.35
        assert_eq!(to_fixed_1(0.35), "0.3");
    }

    #[test]
    fn test_to_fixed_1_zero_and_non_finite() {
        assert_eq!(to_fixed_1(-0.0), "0.0");
        assert_eq!(to_fixed_1(f64::NAN), "NaN");
        assert_eq!(to_fixed_1(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(trim_trailing_zeros("2.50"), "2.5");
        assert_eq!(trim_trailing_zeros("3.00"), "3");
        assert_eq!(trim_trailing_zeros("10.0"), "10");
        assert_eq!(trim_trailing_zeros("100"), "100");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(250.0), "250");
        assert_eq!(format_quantity(2.96), "3");
        assert_eq!(format_quantity(0.04), "0");
        assert_eq!(format_quantity(1.0 / 3.0), "0.3");
        assert_eq!(format_quantity(-1.5), "-1.5");
        assert_eq!(format_quantity(-0.0), "0");
        assert_eq!(format_quantity(0.0), "0");
    }
}
