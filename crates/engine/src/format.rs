//! Display formatting for amounts and prices
//!
//! Tiers by magnitude:
//! - `0` prints as `"0"`
//! - below 1e-6: scientific, 2 fractional digits
//! - below 1: fixed, caller-chosen precision
//! - below 1000: fixed, 4 fractional digits
//! - otherwise: comma-grouped, at most 2 fractional digits

/// Fractional digits for sub-unit amounts unless the caller asks otherwise
pub const DEFAULT_PRECISION: usize = 6;

/// Fractional digits used for reference-currency (USD) values
pub const USD_PRECISION: usize = 2;

const SCIENTIFIC_BELOW: f64 = 1e-6;
const FIXED_4_FROM: f64 = 1.0;
const GROUPED_FROM: f64 = 1000.0;

/// Format a value for display
///
/// Non-finite values print as `"0"`, the same "not a real amount" reading
/// that conversions use.
pub fn format_for_display(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs < SCIENTIFIC_BELOW {
        format!("{:.2e}", value)
    } else if abs < FIXED_4_FROM {
        format!("{:.*}", precision, value)
    } else if abs < GROUPED_FROM {
        format!("{:.4}", value)
    } else {
        format_grouped(value)
    }
}

/// [`format_for_display`] with [`DEFAULT_PRECISION`]
pub fn format_with_default(value: f64) -> String {
    format_for_display(value, DEFAULT_PRECISION)
}

fn format_grouped(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }

    let digits = int_part.as_bytes();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_with_default(0.0), "0");
        assert_eq!(format_with_default(-0.0), "0");
    }

    #[test]
    fn test_scientific_tier() {
        assert_eq!(format_with_default(0.0000001), "1.00e-7");
        assert_eq!(format_with_default(0.000000123456), "1.23e-7");
        assert_eq!(format_with_default(-0.0000005), "-5.00e-7");
    }

    #[test]
    fn test_sub_unit_tier() {
        assert_eq!(format_with_default(0.5), "0.500000");
        assert_eq!(format_with_default(0.000001), "0.000001");
        assert_eq!(format_for_display(0.123456789, 2), "0.12");
    }

    #[test]
    fn test_four_digit_tier() {
        assert_eq!(format_with_default(42.123456), "42.1235");
        assert_eq!(format_with_default(1.0), "1.0000");
        assert_eq!(format_with_default(999.5), "999.5000");
    }

    #[test]
    fn test_grouped_tier() {
        assert_eq!(format_with_default(1500000.0), "1,500,000");
        assert_eq!(format_with_default(1000.0), "1,000");
        assert_eq!(format_with_default(1234.567), "1,234.57");
        assert_eq!(format_with_default(1645.9), "1,645.9");
        assert_eq!(format_with_default(123456.004), "123,456");
        assert_eq!(format_with_default(-26002.82), "-26,002.82");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_with_default(f64::NAN), "0");
        assert_eq!(format_with_default(f64::INFINITY), "0");
    }
}
