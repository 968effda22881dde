//! Rate formatting shared by every derived statistic.
//!
//! Two display conventions exist:
//! - three-decimal rates (AVG, OBP, SLG, OPS, win%) drop the leading zero: `.330`
//! - two-decimal rates (ERA, WHIP) keep it: `3.42`
//!
//! Rounding is half-up on the exact binary value, so `0.0625` becomes `.063`.

pub const ZERO_RATE: &str = ".000";
pub const ZERO_FIXED2: &str = "0.00";

/// Formats `value` with `digits` decimals, rounding exact ties away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", digits, 0.0);
    }
    if is_exact_tie(value.abs(), digits) {
        let scale = 10f64.powi(digits as i32);
        let rounded = ((value.abs() * scale).floor() + 1.0) / scale;
        let signed = if value < 0.0 { -rounded } else { rounded };
        return format!("{:.*}", digits, signed);
    }
    format!("{:.*}", digits, value)
}

// True when the exact decimal expansion is a 5 right after `digits` and zeros beyond.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let expanded = format!("{:.*}", digits + 25, value);
    let Some((_, frac)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &frac[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// `0.330` -> `.330`. Values of 1 or more keep their integer part.
pub fn strip_leading_zero(formatted: &str) -> String {
    match formatted.strip_prefix('0') {
        Some(rest) if rest.starts_with('.') => rest.to_string(),
        _ => formatted.to_string(),
    }
}

/// Three-decimal rate with the leading zero removed.
pub fn format_rate(value: f64) -> String {
    strip_leading_zero(&to_fixed(value, 3))
}

/// `numerator / denominator` as a three-decimal rate; `.000` when the denominator is zero.
pub fn rate(numerator: f64, denominator: f64) -> String {
    if denominator == 0.0 {
        return ZERO_RATE.to_string();
    }
    format_rate(numerator / denominator)
}

/// Two-decimal value, leading zero kept; `0.00` when the denominator is zero.
pub fn fixed2_ratio(numerator: f64, denominator: f64) -> String {
    if denominator == 0.0 {
        return ZERO_FIXED2.to_string();
    }
    to_fixed(numerator / denominator, 2)
}

/// Reads a rate string back as a number. `.330` is read as `0.330`.
pub fn parse_rate(rate: &str) -> f64 {
    format!("0{}", rate).parse::<f64>().unwrap_or(0.0)
}

/// Sums two rate strings and formats the total the same way (OPS).
pub fn sum_rates(a: &str, b: &str) -> String {
    format_rate(parse_rate(a) + parse_rate(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.33), ".330");
        assert_eq!(format_rate(0.3), ".300");
        assert_eq!(format_rate(0.0), ".000");
        assert_eq!(format_rate(1.0), "1.000");
        assert_eq!(format_rate(1.25), "1.250");
        assert_eq!(format_rate(2.0 / 3.0), ".667");
        assert_eq!(format_rate(1.0 / 3.0), ".333");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_rate(1.0 / 16.0), ".063");
        assert_eq!(format_rate(3.0 / 16.0), ".188");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        // 1.005 is stored slightly below the tie.
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(rate(3.0, 0.0), ".000");
        assert_eq!(fixed2_ratio(2.0, 0.0), "0.00");
        assert_eq!(rate(3.0, 10.0), ".300");
        assert_eq!(fixed2_ratio(18.0, 6.0), "3.00");
    }

    #[test]
    fn test_parse_and_sum() {
        assert_eq!(parse_rate(".330"), 0.33);
        assert_eq!(parse_rate("1.250"), 1.25);
        assert_eq!(parse_rate(""), 0.0);
        assert_eq!(sum_rates(".400", ".500"), ".900");
        assert_eq!(sum_rates(".500", ".750"), "1.250");
        assert_eq!(sum_rates(".000", ".000"), ".000");
    }

    #[test]
    fn test_strip_leading_zero() {
        assert_eq!(strip_leading_zero("0.330"), ".330");
        assert_eq!(strip_leading_zero("10.000"), "10.000");
        assert_eq!(strip_leading_zero("0"), "0");
    }
}
