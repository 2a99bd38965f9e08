use super::store::VariableStore;
use crate::value::Value;
use num::BigInt;
use std::borrow::Cow;

/// Evaluate a single expression against the variable store.
///
/// Total: every input maps to some value. Rules are tried in a fixed order
/// and the first one that matches decides the result:
///
/// 1. `"..."` (at least two characters) is text with the quotes stripped.
/// 2. Anything containing a `.` is parsed as a float, or kept raw if that fails.
/// 3. `'...'` has its interior parsed as a whole number, or is kept raw.
/// 4. A bound variable name yields the bound value.
/// 5. Everything else is raw text.
///
/// Rule 2 runs before variable lookup, so a dotted name is never resolved.
#[tracing::instrument(level = "trace", skip(store), ret)]
pub fn evaluate(expr: &str, store: &VariableStore) -> Value {
    let expr = expr.trim();

    if let Some(text) = strip_enclosing(expr, '"') {
        return Value::text(text);
    }

    if expr.contains('.') {
        return match parse_float(expr) {
            Some(number) => Value::Float(number),
            None => Value::raw(expr),
        };
    }

    if let Some(interior) = strip_enclosing(expr, '\'') {
        return match parse_whole_number(interior) {
            Some(number) => Value::Integer(number),
            None => Value::raw(expr),
        };
    }

    match store.get(expr) {
        Some(value) => value.clone(),
        None => Value::raw(expr),
    }
}

fn strip_enclosing(expr: &str, quote: char) -> Option<&str> {
    if expr.len() < 2 {
        return None;
    }
    expr.strip_prefix(quote)?.strip_suffix(quote)
}

fn parse_float(text: &str) -> Option<f64> {
    remove_digit_separators(text)?.parse().ok()
}

/// Whole-number syntax: optional surrounding whitespace, optional sign,
/// decimal digits of any length.
fn parse_whole_number(interior: &str) -> Option<BigInt> {
    remove_digit_separators(interior.trim())?.parse().ok()
}

/// Drops `_` digit separators. Each one must sit between two decimal digits,
/// otherwise the text is not a number at all.
fn remove_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !before.is_some_and(|b| b.is_ascii_digit()) || !after.is_some_and(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some(Cow::Owned(text.replace('_', "")))
}
