//! Display formatting shared by the renderer and chart tooltips

use chrono::{DateTime, Utc};

/// Round to the nearest integer and group thousands with commas.
///
/// ```
/// use learnboard_core::utils::format::format_thousands;
///
/// assert_eq!(format_thousands(1234567.4), "1,234,567");
/// assert_eq!(format_thousands(-9876.0), "-9,876");
/// ```
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Two decimal places, `0.00` when the ratio is missing or not a number.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) if value.is_finite() => format!("{value:.2}"),
        _ => "0.00".to_string(),
    }
}

/// Short calendar date used on chart axes and tooltips, e.g. `Mar 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Signed per-event delta, e.g. `+1,200 XP`.
pub fn format_delta(amount: f64) -> String {
    if amount < 0.0 {
        format!("{} XP", format_thousands(amount))
    } else {
        format!("+{} XP", format_thousands(amount))
    }
}
