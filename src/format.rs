//! Display formatting for prices, volumes and percentage changes.

use num_format::{Locale, ToFormattedString};

/// `67234.5` -> `"$67,234.50"`. Negative values render as `"-$12.30"`.
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}${}", sign, grouped_two_decimals(price.abs()))
}

/// Price with an explicit sign, used for profit labels: `"+$15,234.20"`.
pub fn format_signed_price(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_price(value))
    } else {
        format_price(value)
    }
}

pub fn format_volume(volume: f64) -> String {
    if volume >= 1e9 {
        format!("${:.2}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("${:.2}M", volume / 1e6)
    } else {
        format!("${:.2}", volume)
    }
}

/// `3.24` -> `"+3.24%"`, `-1.45` -> `"-1.45%"`.
pub fn format_change(change: f64) -> String {
    // Normalize -0.0 so it does not print as "+-0.00%".
    let change = if change == 0.0 { 0.0 } else { change };
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, change)
}

/// `value` must be finite and non-negative. The cast saturates, so NaN
/// renders as 0 and anything past `u64::MAX` cents is capped.
fn grouped_two_decimals(value: f64) -> String {
    debug_assert!(value.is_finite(), "formatting non-finite amount {value}");
    let cents = (value * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    format!("{}.{:02}", whole.to_formatted_string(&Locale::en), frac)
}
