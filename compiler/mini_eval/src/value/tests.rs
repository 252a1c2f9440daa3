#![allow(clippy::unwrap_used)]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn s(text: &str) -> Value {
    Value::from(text)
}

fn error_kind(result: EvalResult) -> EvalErrorKind {
    result.unwrap_err().kind
}

// === Arithmetic ===

#[test]
fn add_integers_and_strings() {
    assert_eq!(Value::Int(3).add(&Value::Int(4)).unwrap(), Value::Int(7));
    assert_eq!(s("ab").add(&s("cd")).unwrap(), s("abcd"));
}

#[test]
fn add_mixed_kinds_is_fatal() {
    assert!(matches!(
        error_kind(Value::Int(1).add(&s("x"))),
        EvalErrorKind::BinaryTypeMismatch {
            left: "integer",
            right: "string",
            ..
        }
    ));
}

#[test]
fn subtract_integers_only() {
    assert_eq!(Value::Int(3).subtract(&Value::Int(5)).unwrap(), Value::Int(-2));
    assert!(s("ab").subtract(&s("b")).is_err());
}

#[test]
fn multiply_repeats_strings_either_side() {
    assert_eq!(Value::Int(3).multiply(&s("ab")).unwrap(), s("ababab"));
    assert_eq!(s("ab").multiply(&Value::Int(2)).unwrap(), s("abab"));
    assert_eq!(Value::Int(0).multiply(&s("ab")).unwrap(), s(""));
}

#[test]
fn multiply_negative_repeat_is_fatal() {
    assert_eq!(
        error_kind(Value::Int(-1).multiply(&s("ab"))),
        EvalErrorKind::NegativeRepeatCount
    );
}

#[test]
fn minus_one_times_bool_negates() {
    assert_eq!(
        Value::Int(-1).multiply(&Value::Bool(true)).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        Value::Int(-1).multiply(&Value::Bool(false)).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn other_int_bool_products_are_fatal() {
    assert!(Value::Int(2).multiply(&Value::Bool(true)).is_err());
    assert!(Value::Bool(true).multiply(&Value::Int(-1)).is_err());
}

#[test]
fn divide_truncates() {
    assert_eq!(Value::Int(7).divide(&Value::Int(2)).unwrap(), Value::Int(3));
    assert_eq!(Value::Int(-7).divide(&Value::Int(2)).unwrap(), Value::Int(-3));
}

#[test]
fn divide_by_zero_is_fatal() {
    assert_eq!(
        error_kind(Value::Int(5).divide(&Value::Int(0))),
        EvalErrorKind::DivisionByZero
    );
}

// === Comparison ===

#[test]
fn ordering_on_integers_and_strings() {
    assert_eq!(Value::Int(1).less_than(&Value::Int(2)).unwrap(), Value::Bool(true));
    assert_eq!(Value::Int(2).less_equal(&Value::Int(2)).unwrap(), Value::Bool(true));
    assert_eq!(s("b").greater_than(&s("a")).unwrap(), Value::Bool(true));
    assert_eq!(s("a").greater_equal(&s("b")).unwrap(), Value::Bool(false));
}

#[test]
fn ordering_booleans_is_fatal() {
    assert!(Value::Bool(true).less_than(&Value::Bool(false)).is_err());
}

#[test]
fn equality_within_a_kind() {
    assert_eq!(Value::Int(2).equals(&Value::Int(2)).unwrap(), Value::Bool(true));
    assert_eq!(s("a").not_equals(&s("a")).unwrap(), Value::Bool(false));
    assert_eq!(
        Value::Bool(true).equals(&Value::Bool(false)).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn equality_across_kinds_is_fatal_not_false() {
    assert!(Value::Int(1).equals(&s("1")).is_err());
    assert!(Value::Bool(true).not_equals(&Value::Int(1)).is_err());
}

#[test]
fn undefined_operands_are_fatal() {
    assert!(Value::default().add(&Value::Int(1)).is_err());
    assert!(Value::default().equals(&Value::default()).is_err());
}

// === Rendering ===

#[test]
fn renders_each_kind() {
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(s("hi there").to_string(), "hi there");
    assert_eq!(Value::Error(Some("boom".into())).to_string(), "RUNTIME ERROR boom");
    assert_eq!(Value::Error(None).to_string(), "TYPE ERROR");
    assert_eq!(Value::Error(Some(String::new())).to_string(), "TYPE ERROR");
}

#[test]
fn default_is_undefined_without_message() {
    assert_eq!(Value::default(), Value::Error(None));
    assert_eq!(Value::default().type_name(), "undefined");
}

#[test]
fn operands_are_not_mutated() {
    let a = s("ab");
    let b = Value::Int(2);
    let _ = a.multiply(&b).unwrap();
    assert_eq!(a, s("ab"));
    assert_eq!(b, Value::Int(2));
}

#[test]
fn as_bool_only_for_booleans() {
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(s("true").as_bool(), None);
    assert_eq!(Value::default().as_bool(), None);
}
