//! Numeric helpers shared by the engine and the exporters.

use tracing::debug;

/// Base size used when input cannot be parsed.
pub const DEFAULT_BASE_SIZE: f64 = 16.0;

/// Ratio used when a custom ratio cannot be parsed.
pub const DEFAULT_CUSTOM_RATIO: f64 = 1.25;

/// Round to two decimal places, halves rounding up.
///
/// This is the rounding every exported size goes through, applied
/// immediately after each computation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Format with exactly two decimals, ties rounding away from zero.
pub fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    // Only multiples of 1/8 with an odd numerator sit exactly halfway
    // between two hundredths.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        let hundredths = (value.abs() * 100.0 + 0.5).floor();
        return format!("{sign}{:.2}", hundredths / 100.0);
    }
    format!("{value:.2}")
}

/// Print a number the way a browser's `String(number)` does.
///
/// Shortest round-trip digits, no trailing `.0` on integers, `-0` shown as
/// `0`, and exponent notation outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parse a base size, falling back to 16px.
///
/// Leading numeric text is accepted (`"18px"` is 18). Empty, unparseable,
/// zero and NaN inputs all fall back.
pub fn parse_base_size(input: &str) -> f64 {
    parse_or(input, DEFAULT_BASE_SIZE)
}

/// Parse a custom ratio, falling back to 1.25.
pub fn parse_ratio(input: &str) -> f64 {
    parse_or(input, DEFAULT_CUSTOM_RATIO)
}

fn parse_or(input: &str, fallback: f64) -> f64 {
    match parse_leading_f64(input) {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => {
            debug!(input, fallback, "numeric input rejected, using fallback");
            fallback
        }
    }
}

/// Parse the longest numeric prefix of `input`.
fn parse_leading_f64(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > fraction_start || has_digits {
            has_digits = has_digits || cursor > fraction_start;
            end = cursor;
        }
    }
    if !has_digits {
        return trimmed
            .strip_prefix("Infinity")
            .map(|_| f64::INFINITY)
            .or_else(|| trimmed.strip_prefix("-Infinity").map(|_| f64::NEG_INFINITY));
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}
