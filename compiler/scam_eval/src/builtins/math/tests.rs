use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{ErrorCategory, EvalErrorKind};

fn render(result: EvalResult) -> String {
    result.unwrap().to_string()
}

#[test]
fn test_ceil_and_floor() {
    assert_eq!(render(round("ceil", &[Value::float(2.1)], f64::ceil)), "3");
    assert_eq!(render(round("floor", &[Value::float(-2.1)], f64::floor)), "-3");
    assert_eq!(render(round("floor", &[Value::int(7)], f64::floor)), "7");
    assert!(round("ceil", &[Value::float(f64::INFINITY)], f64::ceil).is_err());
}

#[test]
fn test_abs() {
    assert_eq!(render(abs(&[Value::int(-4)])), "4");
    assert_eq!(render(abs(&[Value::float(-0.5)])), "0.5");
    assert_eq!(
        abs(&[Value::int(i64::MIN)]).unwrap_err().category(),
        ErrorCategory::Domain
    );
}

#[test]
fn test_divmod() {
    assert_eq!(render(divmod(&[Value::int(17), Value::int(5)])), "[3 2]");
    assert_eq!(render(divmod(&[Value::int(-17), Value::int(5)])), "[-4 3]");
    assert_eq!(
        divmod(&[Value::int(1), Value::int(0)]).unwrap_err().kind,
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn test_sqrt() {
    assert_eq!(render(sqrt(&[Value::int(16)])), "4.0");
    assert!(matches!(
        sqrt(&[Value::float(-1.0)]).unwrap_err().kind,
        EvalErrorKind::MathDomain { .. }
    ));
}

#[test]
fn test_pow() {
    assert_eq!(render(pow(&[Value::int(2), Value::int(10)])), "1024");
    assert_eq!(render(pow(&[Value::int(2), Value::int(-1)])), "0.5");
    assert_eq!(render(pow(&[Value::float(4.0), Value::float(0.5)])), "2.0");
    assert_eq!(render(pow(&[Value::int(0), Value::int(0)])), "1");
    assert_eq!(render(pow(&[Value::int(-1), Value::int(i64::MAX)])), "-1");
    assert_eq!(render(pow(&[Value::int(1), Value::int(i64::MAX)])), "1");
    assert!(pow(&[Value::int(2), Value::int(64)]).is_err());
    assert!(pow(&[Value::float(-8.0), Value::float(0.5)]).is_err());
}

#[test]
fn test_logarithms() {
    assert_eq!(render(ln(&[Value::int(1)])), "0.0");
    assert!(ln(&[Value::int(0)]).is_err());
    assert_eq!(render(log(&[Value::int(8), Value::int(2)])), "3.0");
    assert!(log(&[Value::int(8), Value::int(1)]).is_err());
    assert!(log(&[Value::int(-8), Value::int(2)]).is_err());
    assert!(log(&[Value::int(8), Value::int(0)]).is_err());
}
