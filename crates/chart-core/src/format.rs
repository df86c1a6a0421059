// File: crates/chart-core/src/format.rs
// Summary: Currency label formatting for tooltips and axis ticks ("KES 1,234,567").

/// Currency prefix used on the y-axis and in tooltips.
pub const CURRENCY_PREFIX: &str = "KES ";

/// Format a value as a KES amount with thousands grouping. Integral values
/// render with no decimals; fractional values keep exactly two.
pub fn format_kes(value: f64) -> String {
    format!("{}{}", CURRENCY_PREFIX, group_thousands(value))
}

/// Group the integer digits of `value` with commas, preserving sign and a
/// two-digit fraction when the value is not integral.
pub fn group_thousands(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let magnitude = value.abs();
    let fractional = magnitude.fract() > f64::EPSILON;

    // Two decimals for fractional amounts, none otherwise; rounding first so
    // e.g. 999.999 groups as 1,000.00 rather than 999.00 + "1.00" carry bugs.
    let rendered = if fractional {
        format!("{magnitude:.2}")
    } else {
        format!("{:.0}", magnitude)
    };

    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    let digits = int_part.as_bytes();
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
