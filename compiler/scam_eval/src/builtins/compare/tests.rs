use pretty_assertions::assert_eq;

use super::*;
use crate::errors::ErrorCategory;

fn eq(left: Value, right: Value) -> bool {
    equal(&[left, right]).unwrap().as_bool().unwrap()
}

#[test]
fn test_numeric_equality() {
    assert!(eq(Value::int(1), Value::int(1)));
    assert!(eq(Value::int(1), Value::float(1.0)));
    assert!(eq(Value::float(1.0), Value::int(1)));
    assert!(!eq(Value::int(1), Value::float(0.999)));
}

#[test]
fn test_cross_family_is_false() {
    assert!(!eq(Value::int(10), Value::string("10")));
    assert!(!eq(Value::list(Vec::new()), Value::string("")));
    assert!(!eq(Value::bool(true), Value::int(1)));
}

#[test]
fn test_string_equality() {
    assert!(eq(Value::string("abc"), Value::string("abc")));
    assert!(eq(Value::string(""), Value::string("")));
    assert!(!eq(Value::string("hello"), Value::string("hallo")));
    assert!(!eq(Value::string("short"), Value::string("much longer")));
}

fn lt(left: Value, right: Value) -> EvalResult {
    ordered("<", &[left, right], Ordering::is_lt)
}

#[test]
fn test_ordering() {
    assert_eq!(lt(Value::int(1), Value::float(1.5)).unwrap(), Value::bool(true));
    assert_eq!(
        lt(Value::string("b"), Value::string("a")).unwrap(),
        Value::bool(false)
    );
    assert_eq!(
        ordered(">=", &[Value::int(2), Value::float(2.0)], Ordering::is_ge).unwrap(),
        Value::bool(true)
    );
    assert_eq!(
        lt(Value::float(f64::NAN), Value::int(1)).unwrap(),
        Value::bool(false)
    );
}

#[test]
fn test_ordering_mixed_families_fails() {
    let err = lt(Value::int(1), Value::string("a")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
}
