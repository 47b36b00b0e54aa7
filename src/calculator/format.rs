//! Result formatting.
//!
//! Produces the text printed for a computed value, either grouped with
//! thousand separators for reading or plain for piping into other tools.

/// Format a number for display with thousand separators.
pub fn format_display(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    if is_whole(value) {
        return format_with_separators(value as i64);
    }

    let trimmed = format_decimal(value, precision);
    match trimmed.split_once('.') {
        Some((int_part, dec_part)) => {
            let sign = if int_part.starts_with('-') { "-" } else { "" };
            let digits = int_part.trim_start_matches('-');
            format!("{sign}{}.{dec_part}", group_digits(digits))
        }
        None => {
            let sign = if trimmed.starts_with('-') { "-" } else { "" };
            format!("{sign}{}", group_digits(trimmed.trim_start_matches('-')))
        }
    }
}

/// Format a number as a raw value, no separators.
pub fn format_plain(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_string();
    }

    if is_whole(value) {
        format!("{}", value as i64)
    } else {
        format_decimal(value, precision)
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("Not a Number")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < 1e15
}

/// Fixed-point rendering with trailing zeros removed.
fn format_decimal(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an integer with thousand separators.
fn format_with_separators(value: i64) -> String {
    let formatted = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
