//! Numeric formatting and parsing policy for the display register.

/// Format a committed numeric value as display text.
///
/// Uses Rust's shortest `f64` representation (`16`, not `16.0`). Negative
/// zero normalizes to `"0"`, and non-finite values fold to `"NaN"` so the
/// display never shows platform spellings like `inf`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Parse the display text back into a number.
///
/// The display invariant keeps this parseable (a trailing decimal point as
/// in `"3."` is still a valid `f64` literal); anything else falls back to
/// `0` under the engine's no-throw policy.
#[must_use]
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}
