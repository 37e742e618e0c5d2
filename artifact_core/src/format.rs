//! Display formatting for stat values

use serde::{Deserialize, Serialize};

/// Locale settings for rendering numbers.
///
/// Defaults to Brazilian Portuguese grouping (`12.345`), with no fraction
/// digits, which is how the game community reads stat totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberFormat {
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default)]
    pub max_fraction_digits: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            max_fraction_digits: 0,
        }
    }
}

fn default_thousands_separator() -> char {
    '.'
}
fn default_decimal_separator() -> char {
    ','
}

impl NumberFormat {
    /// Format a number; non-finite input renders as an empty string.
    ///
    /// Rounds half away from zero to `max_fraction_digits` and drops
    /// trailing fraction zeros.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }

        let digits = self.max_fraction_digits.min(15) as usize;
        let factor = 10f64.powi(digits as i32);
        let rounded = (value.abs() * factor).round() / factor;

        let fixed = format!("{:.*}", digits, rounded);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value < 0.0 && rounded != 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part, self.thousands_separator));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format a stat with the default locale
pub fn format_stat(value: f64) -> String {
    NumberFormat::default().format(value)
}
