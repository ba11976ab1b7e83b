//! Metric values as embedded into prompts.

use std::fmt;

/// Maximum fraction digits kept when formatting numbers.
const FRACTION_DIGITS: usize = 3;

/// A metric value: numeric, or free text from an upstream source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number, formatted with en-US grouping.
    Number(f64),
    /// Text, formatted as a number when it parses as one.
    Text(String),
}

impl Value {
    /// The value as written into prompts.
    pub fn formatted(&self) -> String {
        match self {
            Self::Number(n) => format_number(*n),
            Self::Text(text) => match text.trim().replace(',', "").parse::<f64>() {
                Ok(n) => format_number(n),
                Err(_) => text.trim().to_owned(),
            },
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Format `value` the way an en-US number formatter does: comma thousands
/// separators and at most three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let rounded = format!("{:.*}", FRACTION_DIGITS, value.abs());
    let (int, frac) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int.len() / 3 + 1);
    let is_zero = int.bytes().all(|b| b == b'0') && frac.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
