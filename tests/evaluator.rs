//! Literal and variable evaluation, including the rule-order quirks.

use lumira::interpreter::evaluate;
use lumira::{Value, VariableStore};
use num::BigInt;
use proptest::prelude::*;

fn eval(expr: &str) -> Value {
    evaluate(expr, &VariableStore::new())
}

#[test]
fn test_dot_rule_runs_before_variable_lookup() {
    let mut store = VariableStore::new();
    store.bind("3.5", Value::text("shadowed"));
    assert_eq!(evaluate("3.5", &store), Value::Float(3.5));
}

#[test]
fn test_dot_rule_runs_before_single_quotes() {
    assert_eq!(eval("'1.5'"), Value::raw("'1.5'"));
}

#[test]
fn test_double_quotes_run_before_dot_rule() {
    assert_eq!(eval("\"1.5\""), Value::text("1.5"));
}

#[test]
fn test_quote_mismatch_falls_through() {
    assert_eq!(eval("\"open"), Value::raw("\"open"));
    assert_eq!(eval("'7\""), Value::raw("'7\""));
}

#[test]
fn test_single_quote_alone() {
    assert_eq!(eval("'"), Value::raw("'"));
}

#[test]
fn test_variable_values_are_returned_as_bound() {
    let mut store = VariableStore::new();
    store.bind("pi", Value::Float(2.75));
    store.bind("n", Value::integer(-3));
    store.bind("word", Value::raw("plain"));
    assert_eq!(evaluate("pi", &store), Value::Float(2.75));
    assert_eq!(evaluate("n", &store), Value::integer(-3));
    assert_eq!(evaluate("word", &store), Value::raw("plain"));
}

#[test]
fn test_plain_digits_are_raw() {
    assert_eq!(eval("5"), Value::raw("5"));
}

#[test]
fn test_exponent_needs_a_dot() {
    assert_eq!(eval("1.5e3"), Value::Float(1500.0));
    assert_eq!(eval("1e3"), Value::raw("1e3"));
}

proptest! {
    #[test]
    fn prop_double_quotes_are_stripped(s in "[^\"]*") {
        let expr = format!("\"{}\"", s);
        prop_assert_eq!(eval(&expr), Value::text(&s));
    }

    #[test]
    fn prop_single_quoted_integers(n in any::<i64>()) {
        let expr = format!("'{}'", n);
        prop_assert_eq!(eval(&expr), Value::integer(n));
    }

    #[test]
    fn prop_single_quoted_integers_of_any_length(digits in "-?[1-9][0-9]{0,60}") {
        let expr = format!("'{}'", digits);
        let expected: BigInt = digits.parse().unwrap();
        prop_assert_eq!(eval(&expr), Value::Integer(expected));
        prop_assert_eq!(eval(&expr).to_string(), digits);
    }

    #[test]
    fn prop_separated_dotted_decimals(whole in 1u32..1_000_000, frac in 0u32..1_000) {
        let plain = format!("{}.{}", whole, frac);
        let grouped = format!("{}_0.{}", whole, frac);
        let expected: f64 = format!("{}0.{}", whole, frac).parse().unwrap();
        prop_assert_eq!(eval(&plain), Value::Float(plain.parse().unwrap()));
        prop_assert_eq!(eval(&grouped), Value::Float(expected));
    }

    #[test]
    fn prop_dotted_decimals_parse_as_floats(whole in 0u32..1_000_000, frac in 0u32..1_000_000) {
        let expr = format!("{}.{}", whole, frac);
        let expected: f64 = expr.parse().unwrap();
        prop_assert_eq!(eval(&expr), Value::Float(expected));
    }

    #[test]
    fn prop_dotted_words_stay_raw(word in "[a-z]{1,8}\\.[a-z]{1,8}") {
        prop_assume!(word.parse::<f64>().is_err());
        prop_assert_eq!(eval(&word), Value::raw(&word));
    }
}
