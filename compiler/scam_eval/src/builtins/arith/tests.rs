use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{ErrorCategory, EvalErrorKind};

fn ints(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::int).collect()
}

fn render(result: EvalResult) -> String {
    result.unwrap().to_string()
}

#[test]
fn test_add_stays_int() {
    assert_eq!(render(add(&ints(&[1, 2, 3, 4, 5]))), "15");
}

#[test]
fn test_add_promotes_on_any_float() {
    let args = vec![
        Value::int(1),
        Value::int(2),
        Value::float(3.0),
        Value::int(4),
        Value::int(5),
    ];
    assert_eq!(render(add(&args)), "15.0");
}

#[test]
fn test_add_overflow() {
    let err = add(&ints(&[i64::MAX, 1])).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IntegerOverflow {
            operation: "addition".to_string()
        }
    );
}

#[test]
fn test_sub_folds_left() {
    assert_eq!(render(sub(&ints(&[10, 8, 2, 3]))), "-3");
    assert_eq!(render(sub(&[Value::int(10), Value::float(3.0)])), "7.0");
}

#[test]
fn test_unary_minus_keeps_family() {
    assert_eq!(render(sub(&ints(&[10]))), "-10");
    assert_eq!(render(sub(&[Value::float(2.5)])), "-2.5");
    assert!(sub(&ints(&[i64::MIN])).is_err());
}

#[test]
fn test_mul() {
    assert_eq!(render(mul(&ints(&[1, 2, 3, 4, 5, 6]))), "720");
    assert_eq!(
        render(mul(&[Value::float(3.2), Value::float(7.4)])),
        "23.680000000000003"
    );
    assert!(mul(&ints(&[i64::MAX, 2])).is_err());
}

#[test]
fn test_div_is_always_float() {
    assert_eq!(render(div(&ints(&[10, 2]))), "5.0");
    assert_eq!(render(div(&ints(&[0, 42]))), "0.0");
    assert_eq!(
        render(div(&[Value::int(-72), Value::float(2.5)])),
        "-28.8"
    );
}

#[test]
fn test_div_checks_every_divisor() {
    assert_eq!(div(&ints(&[10, 0])).unwrap_err().kind, EvalErrorKind::DivisionByZero);
    assert_eq!(
        div(&ints(&[10, 23, 0])).unwrap_err().category(),
        ErrorCategory::Domain
    );
    assert!(div(&[Value::int(1), Value::float(0.0)]).is_err());
    // zero dividend is fine
    assert!(div(&ints(&[0, 1])).is_ok());
}

#[test]
fn test_floor_div() {
    assert_eq!(render(floor_div(&ints(&[10, 3]))), "3");
    assert_eq!(render(floor_div(&ints(&[50, 11, 2]))), "2");
    assert_eq!(render(floor_div(&ints(&[-7, 2]))), "-4");
    assert_eq!(
        floor_div(&ints(&[10, 0])).unwrap_err().kind,
        EvalErrorKind::DivisionByZero
    );
    assert!(floor_div(&ints(&[i64::MIN, -1])).is_err());
}

#[test]
fn test_floor_div_rejects_float() {
    let err = floor_div(&[Value::int(10), Value::float(3.0)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(err.argument_position(), Some(1));
}

#[test]
fn test_rem() {
    assert_eq!(render(rem(&ints(&[73, 2]))), "1");
    assert_eq!(render(rem(&ints(&[67, 7]))), "4");
    assert_eq!(render(rem(&ints(&[0, 10]))), "0");
    assert_eq!(render(rem(&ints(&[-7, 3]))), "2");
    assert_eq!(
        rem(&ints(&[10, 0])).unwrap_err().kind,
        EvalErrorKind::ModuloByZero
    );
}
