//! Display formatting for £m-denominated values and percentages.
//!
//! Presentation only; the engine returns plain numbers.

/// Render a £m value at the tier that keeps it readable:
/// `1000` and above as `£1.0bn`, below `1` as `£424k`, else `£115.2m`.
pub fn format_millions(value_m: f64) -> String {
    if value_m >= 1000.0 {
        format!("£{:.1}bn", value_m / 1000.0)
    } else if value_m < 1.0 {
        format!("£{:.0}k", value_m * 1000.0)
    } else {
        format!("£{:.1}m", value_m)
    }
}

/// Render a percentage to two decimal places.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
