// src/format.rs
//! Display formatting for dashboard figures.
//!
//! Both formatters are total for finite input. Non-finite input (`NaN`,
//! `inf`) is not a supported value: it falls through to Rust's `Display`
//! output with the usual prefix or suffix and no digit grouping.

/// Formats `value` as whole US dollars, e.g. `$1,234,567`.
///
/// Rounds half away from zero. Negative amounts keep the sign after the
/// symbol (`$-1,234`).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let rounded = value.round();
    // -0.4 rounds to -0.0, which should not print a sign
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("${}{}", sign, group_thousands(&digits))
}

/// Formats `value` with one fractional digit and a percent sign, e.g. `3.1%`.
///
/// Exact ties round away from zero (`0.25` gives `0.3%`).
pub fn format_percent(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    // `{:.1}` breaks ties toward even; a float only sits exactly on a
    // hundredths tie when it is an odd number of quarters
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    format!("{:.1}%", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
