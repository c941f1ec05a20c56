//! Value rounding and rendering shared by the renderer and the extractor.

/// Round to `dp` decimal places.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let scale = 10f64.powi(dp as i32);
    (value * scale).round() / scale
}

/// Render a value the way the game data does: integers without a decimal
/// point, fractions trimmed.
pub fn format_value(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Render with an explicit leading `+` for non-negative values.
pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_value(value))
    } else {
        format_value(value)
    }
}
