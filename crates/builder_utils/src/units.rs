//! Pixel unit helpers
//!
//! Style values in the editor are stored as CSS strings such as `"12px"`.
//! These helpers move between that form and plain numbers.

/// Parse a pixel string into a number.
///
/// `"12px"` becomes `12.0`. Empty input and anything that does not parse as a
/// finite number yields `0.0`.
pub fn number_from_px(px: &str) -> f64 {
    let trimmed = px.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // Only the first unit suffix is stripped, so "1pxpx" is not a number.
    let number = trimmed.replacen("px", "", 1);
    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format a number as a pixel string.
///
/// With `round` set the value is rounded to the nearest integer, halves
/// rounding up (`-0.5` becomes `0`, `10.5` becomes `11`).
pub fn add_px_to_number(number: f64, round: bool) -> String {
    let value = if round { round_half_up(number) } else { number };
    // Avoid printing "-0px"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
