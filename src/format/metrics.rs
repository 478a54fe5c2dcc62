//! Metric formatting. Stateless, total functions.
//!
//! Rounding is half-away-from-zero everywhere: scale by 10^n, `f64::round`,
//! scale back. Inputs must be finite; NaN and infinities are a caller
//! precondition violation and produce unspecified text.

/// Fraction digits of rounded ratios (RAR, statistics).
pub const VALUE_PRECISION: usize = 3;
/// Fraction digits kept on displayed feature thresholds.
pub const THRESHOLD_PRECISION: usize = 2;
/// Default fraction digits of percentages.
pub const PERCENT_PRECISION: usize = 2;

const CURRENCY_SYMBOL: char = '$';
const GROUP_SEPARATOR: char = ',';

#[inline]
fn round_to(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    // canonical zero, never -0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `0.1234 -> "12.34%"` at the default precision.
pub fn format_percentage(ratio: f64, precision: usize) -> String {
    let percentage = round_to(ratio * 100.0, precision);
    format!("{percentage:.precision$}%")
}

/// US-dollar amount, en-US conventions: `-$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    let negative = amount < 0.0 && cents > 0.0;
    let fixed = format!("{:.2}", cents / 100.0);
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{dec_part}")
}

/// Integers print without a fraction, everything else with three digits.
/// Anything that rounds to an integer prints as one, so zero is `"0"`.
pub fn round_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value}");
    }
    let rounded = round_to(value, VALUE_PRECISION);
    if rounded.fract() == 0.0 {
        // covers zero; "1.9999" reads back as "2", not "2.000"
        format!("{rounded}")
    } else {
        format!("{rounded:.prec$}", prec = VALUE_PRECISION)
    }
}

/// Risk-adjusted ratios: always three fraction digits, `2 -> "2.000"`.
pub fn format_ratio(value: f64) -> String {
    format!("{:.prec$}", round_to(value, VALUE_PRECISION), prec = VALUE_PRECISION)
}

/// Threshold value as displayed in feature descriptors.
#[inline]
pub fn truncate_threshold(value: f64) -> f64 {
    round_to(value, THRESHOLD_PRECISION)
}
