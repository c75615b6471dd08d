//! Value type - a magnitude bound to a unit

use std::fmt;
use serde::{Serialize, Deserialize};
use unitconv_core::{ConvertError, Family};
use crate::Unit;
use crate::convert::resolve;

/// A magnitude in a specific unit. Conversions produce new values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    value: f64,
    unit: Unit,
}

impl Value {
    pub fn new(value: f64, unit: Unit) -> Self {
        Value { value, unit }
    }

    /// The numeric magnitude
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn family(&self) -> Family {
        self.unit.family()
    }

    /// Unit name as displayed next to this magnitude
    pub fn label(&self) -> &'static str {
        self.unit.label(self.value)
    }

    /// Convert to another unit of the same family
    pub fn convert_to(&self, target: Unit) -> Result<Value, ConvertError> {
        let strategy = resolve(Some(self.unit), Some(target))?;
        Ok(Value::new(strategy.apply(self.value), target))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_magnitude(self.value), self.label())
    }
}

/// Format a magnitude the way the JVM prints a double.
///
/// Plain decimal with at least one fractional digit for 1e-3 <= |x| < 1e7,
/// shortest-digit scientific notation ("1.0E7", "2.5E-4") otherwise.
pub fn format_magnitude(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let abs = value.abs();
    if (1e-3..1e7).contains(&abs) {
        // Debug keeps the ".0" on integral values and never switches to exponents in this range
        return format!("{:?}", value);
    }

    let sci = format!("{:e}", abs);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let sign = if value < 0.0 { "-" } else { "" };
    if mantissa.contains('.') {
        format!("{}{}E{}", sign, mantissa, exponent)
    } else {
        format!("{}{}.0E{}", sign, mantissa, exponent)
    }
}

/// Read a magnitude the way the JVM parses a double.
///
/// Accepts an optional sign, decimal digits with optional fraction and
/// exponent, and an optional `d`/`D`/`f`/`F` suffix ("10d"). The only
/// alphabetic spellings accepted are `NaN` and `Infinity`; "inf" and
/// "nan" are rejected. Hexadecimal literals are not supported.
pub fn parse_magnitude(token: &str) -> Option<f64> {
    let token = token.trim_matches(|c: char| c <= ' ');
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, token.strip_prefix('+').unwrap_or(token)),
    };
    match unsigned {
        "NaN" => return Some(f64::NAN),
        "Infinity" => return Some(sign * f64::INFINITY),
        _ => {}
    }

    let digits = unsigned.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(unsigned);
    let well_formed = !digits.starts_with(['+', '-'])
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return None;
    }
    digits.parse::<f64>().ok().map(|v| sign * v)
}
