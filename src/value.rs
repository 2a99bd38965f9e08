use num::BigInt;
use std::fmt;
use std::rc::Rc;

/// A runtime value produced by the evaluator.
///
/// No type tag survives between evaluations: every time an expression is
/// evaluated its variant is derived again from the expression's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Contents of a double-quoted literal, quotes stripped.
    Text(Rc<str>),
    /// A dotted literal that parsed as a floating-point number.
    Float(f64),
    /// A single-quoted literal whose interior parsed as a whole number.
    Integer(BigInt),
    /// Expression text that matched no literal form and no binding.
    Raw(Rc<str>),
}

impl Value {
    pub fn text(s: &str) -> Self {
        Value::Text(Rc::from(s))
    }

    pub fn raw(s: &str) -> Self {
        Value::Raw(Rc::from(s))
    }

    pub fn integer(number: impl Into<BigInt>) -> Self {
        Value::Integer(number.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Float(_) => "float",
            Value::Integer(_) => "integer",
            Value::Raw(_) => "raw",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) | Value::Raw(text) => f.write_str(text),
            Value::Integer(number) => write!(f, "{}", number),
            Value::Float(number) => f.write_str(&format_float(*number)),
        }
    }
}

/// Formats a float the way the language prints numbers: shortest round-trip
/// digits, always with a fractional part, switching to a signed two-digit
/// exponent below 1e-4 and from 1e16 upward.
pub fn format_float(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if number == 0.0 {
        return if number.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", number);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let formatted = number.to_string();
        if formatted.contains('.') {
            formatted
        } else {
            format!("{}.0", formatted)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
