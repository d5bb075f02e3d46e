//! Formatting utilities for real numbers

/// Format a real like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation for exponents below -4 or from 6 upward
pub fn format_g(value: f64) -> String {
    format_g_with(value, 6)
}

/// `%g` with an explicit number of significant digits (0 is treated as 1)
pub fn format_g_with(value: f64, significant: usize) -> String {
    if let Some(special) = format_non_finite(value) {
        return special;
    }
    let significant = significant.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    // Rounding may carry into the next decade, so take the exponent from
    // the rounded scientific form rather than from log10.
    let sci = format!("{:.*e}", significant - 1, value);
    let (mantissa, exponent) = split_exponent(&sci);

    if exponent < -4 || exponent >= significant as i32 {
        format!("{}{}", trim_fraction(mantissa), exponent_suffix(exponent))
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

/// Shortest representation that reads back to the same value, with a
/// signed two-digit exponent when one is needed (`1e-09`, `0.001`, `5.0`)
pub fn format_real(value: f64) -> String {
    if let Some(special) = format_non_finite(value) {
        return special;
    }
    let shortest = format!("{:?}", value);
    if shortest.contains('e') {
        let (mantissa, exponent) = split_exponent(&shortest);
        format!("{}{}", mantissa, exponent_suffix(exponent))
    } else {
        shortest
    }
}

/// Scientific notation with `precision` mantissa digits and a signed,
/// two-digit exponent (`1.5e-03`)
pub fn format_scientific(value: f64, precision: usize) -> String {
    if let Some(special) = format_non_finite(value) {
        return special;
    }
    let sci = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = split_exponent(&sci);
    format!("{}{}", keep_one_decimal(&trim_fraction(mantissa), precision), exponent_suffix(exponent))
}

/// Fixed notation with at most `precision` decimals
pub fn format_fixed(value: f64, precision: usize) -> String {
    if let Some(special) = format_non_finite(value) {
        return special;
    }
    keep_one_decimal(&trim_fraction(&format!("{:.*}", precision, value)), precision)
}

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exponent.abs())
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

// `2` reads as an integer; keep `2.0` unless no decimals were asked for
fn keep_one_decimal(s: &str, precision: usize) -> String {
    if precision > 0 && !s.contains('.') {
        format!("{}.0", s)
    } else {
        s.to_string()
    }
}
