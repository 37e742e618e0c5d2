//! Parse-or-zero handling of user typed numbers.
//!
//! Every numeric field of the form goes through [`parse_decimal`]. The
//! parser is total: it never fails and never returns a non-finite value,
//! so a half-typed field can never poison a comparison with NaN.

/// Return `value` if it is finite, zero otherwise
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a decimal typed with comma as the decimal separator.
///
/// - Only digits, `,`, `.` and a sign in leading position are kept.
/// - With a comma present, dots are thousands separators and are dropped,
///   the first comma is the decimal point and later commas are stripped.
/// - Without a comma, a dot is the decimal point.
/// - Anything that still fails to parse, or parses to a non-finite value,
///   yields `0.0`.
///
/// ```rust
/// use artifact_core::numeric::parse_decimal;
///
/// assert_eq!(parse_decimal("12,5"), 12.5);
/// assert_eq!(parse_decimal("1.234,5"), 1234.5);
/// assert_eq!(parse_decimal("garbage"), 0.0);
/// ```
pub fn parse_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '0'..='9' | ',' | '.' => cleaned.push(c),
            '-' | '+' if cleaned.is_empty() => cleaned.push(c),
            _ => {}
        }
    }

    let normalized = if cleaned.contains(',') {
        let mut out = String::with_capacity(cleaned.len());
        let mut seen_comma = false;
        for c in cleaned.chars() {
            match c {
                '.' => {}
                ',' if !seen_comma => {
                    seen_comma = true;
                    out.push('.');
                }
                ',' => {}
                _ => out.push(c),
            }
        }
        out
    } else {
        cleaned
    };

    normalized.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Sanitize text typed into a decimal percentage field.
///
/// Keeps digits and commas; every comma after the first is removed.
pub fn sanitize_decimal_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_comma = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == ',' && !seen_comma {
            seen_comma = true;
            out.push(c);
        }
    }
    out
}

/// Sanitize text typed into an integer percentage field (digits only)
pub fn sanitize_integer_input(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a number for an editable field, using comma as decimal separator
pub fn to_input_text(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    value.to_string().replace('.', ",")
}
