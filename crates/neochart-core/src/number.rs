//! Canonical number formatting for SVG attributes, style strings and path data.

/// Values closer than this to an integer are written without a fractional part.
pub const PRECISION: f64 = 0.0005;

/// Significant digits used by [`fmt_compact`].
const COMPACT_DIGITS: i32 = 5;

/// Formats `v` as an integer when it lies within [`PRECISION`] of one, otherwise with exactly
/// three fractional digits.
///
/// The distance is measured to the *nearest* integer, so `0.9997` renders as `1` and `-2.0003`
/// as `-2`. Non-finite values render as `0` to keep the markup well-formed.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let nearest = v.round();
    if (v - nearest).abs() < PRECISION {
        let s = format!("{nearest:.0}");
        return if s == "-0" { "0".to_string() } else { s };
    }
    let s = format!("{v:.3}");
    if s == "-0.000" { "0".to_string() } else { s }
}

/// General-purpose compact format: at most five significant digits with trailing zeros
/// removed. Used for arc parameters and single-axis path coordinates.
pub fn fmt_compact(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (COMPACT_DIGITS - 1 - magnitude).clamp(0, 15) as usize;
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
