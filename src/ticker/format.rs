//! Text formatting for the ticker display.

use crate::config::TICKER;

/// Fixed-point formatting with thousands grouping, e.g. `12,345.678900`.
///
/// Negative values keep their sign unless they round to zero. Non-finite
/// input is shown as zero.
pub fn format_grouped(value: f64, fraction_digits: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_digits, TICKER.group_separator));
    if let Some(frac) = frac_digits {
        out.push(TICKER.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Splits formatted text into the big integer part and the small decimal
/// part. The decimal part keeps its leading separator (".000000").
pub fn split_amount(formatted: &str) -> (String, String) {
    match formatted.find(TICKER.decimal_separator) {
        Some(idx) => (formatted[..idx].to_string(), formatted[idx..].to_string()),
        None => (formatted.to_string(), String::new()),
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.*}", TICKER.percent_fraction_digits, ratio * 100.0)
}

/// e.g. "February 2024 progress: 50.0000000%"
pub fn progress_line(month_label: &str, ratio: f64) -> String {
    format!("{} progress: {}%", month_label, format_percent(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.5, 6), "999.500000");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(0.0, 6), "0.000000");
    }

    #[test]
    fn keeps_sign_for_negatives_but_not_negative_zero() {
        assert_eq!(format_grouped(-12345.5, 1), "-12,345.5");
        assert_eq!(format_grouped(-0.0000001, 6), "0.000000");
        assert_eq!(format_grouped(-0.0, 6), "0.000000");
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(format_grouped(f64::NAN, 2), "0.00");
        assert_eq!(format_grouped(f64::INFINITY, 2), "0.00");
    }

    #[test]
    fn splits_integer_and_decimal() {
        let (int_part, dec_part) = split_amount("14,500.000000");
        assert_eq!(int_part, "14,500");
        assert_eq!(dec_part, ".000000");

        let (int_part, dec_part) = split_amount("-3");
        assert_eq!(int_part, "-3");
        assert_eq!(dec_part, "");
    }

    #[test]
    fn percent_has_seven_digits() {
        assert_eq!(format_percent(0.5), "50.0000000");
        assert_eq!(
            progress_line("February 2024", 1.0),
            "February 2024 progress: 100.0000000%"
        );
    }
}
