use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{ErrorCategory, EvalErrorKind};

fn ints(ns: &[i64]) -> Value {
    Value::list(ns.iter().copied().map(Value::int).collect())
}

fn text(s: &str) -> Value {
    Value::string(s)
}

fn render(result: EvalResult) -> String {
    result.unwrap().to_string()
}

#[test]
fn test_is_empty_and_len() {
    assert_eq!(render(is_empty(&[ints(&[])])), "true");
    assert_eq!(render(is_empty(&[ints(&[1, 2])])), "false");
    assert_eq!(render(len(&[ints(&[1, 2, 3, 4, 5, 6])])), "6");
    assert_eq!(render(len(&[text("abc")])), "3");
    assert_eq!(render(len(&[text("")])), "0");
}

#[test]
fn test_head_and_last() {
    assert_eq!(render(head(&[ints(&[1, 2, 3])])), "1");
    assert_eq!(render(last(&[ints(&[1, 2, 3])])), "3");
    assert_eq!(render(head(&[text("abc")])), "\"a\"");
    assert_eq!(render(last(&[text("abc")])), "\"c\"");
    assert_eq!(
        head(&[ints(&[])]).unwrap_err().kind,
        EvalErrorKind::EmptySequence {
            name: "head".to_string()
        }
    );
    assert!(last(&[text("")]).is_err());
}

#[test]
fn test_tail_and_init() {
    assert_eq!(render(tail(&[ints(&[1, 2, 3, 4, 5, 6])])), "[2 3 4 5 6]");
    assert_eq!(render(init(&[ints(&[1, 2, 3, 4, 5, 6])])), "[1 2 3 4 5]");
    assert_eq!(render(tail(&[ints(&[])])), "[]");
    assert_eq!(render(init(&[text("")])), "\"\"");
    assert_eq!(render(tail(&[text("abc")])), "\"bc\"");
}

#[test]
fn test_concat() {
    assert_eq!(
        render(concat(&[text("ab"), text("cd"), text("e")])),
        "\"abcde\""
    );
    assert_eq!(render(concat(&[ints(&[1]), ints(&[]), ints(&[2])])), "[1 2]");
    assert!(concat(&[text("ab"), ints(&[1])]).is_err());
}

#[test]
fn test_get() {
    assert_eq!(render(get(&[text("abc"), Value::int(1)])), "\"b\"");
    assert_eq!(render(get(&[ints(&[4, 5]), Value::int(0)])), "4");
    let err = get(&[text("abc"), Value::int(3)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Domain);
    assert!(get(&[text("abc"), Value::int(-1)]).is_err());
}

#[test]
fn test_slice() {
    let abc = text("abcdefg");
    assert_eq!(render(slice(&[abc.clone(), Value::int(3), Value::int(7)])), "\"defg\"");
    assert_eq!(render(slice(&[abc.clone(), Value::int(2), Value::int(2)])), "\"\"");
    assert!(slice(&[abc.clone(), Value::int(3), Value::int(8)]).is_err());
    assert!(slice(&[abc.clone(), Value::int(4), Value::int(3)]).is_err());
    assert_eq!(
        slice(&[abc, Value::int(-1), Value::int(3)]).unwrap_err().kind,
        EvalErrorKind::SliceOutOfBounds {
            lo: -1,
            hi: 3,
            len: 7
        }
    );
}

#[test]
fn test_take_and_drop() {
    let list = ints(&[1, 2, 3]);
    assert_eq!(render(take(&[list.clone(), Value::int(2)])), "[1 2]");
    assert_eq!(render(drop(&[list.clone(), Value::int(2)])), "[3]");
    assert_eq!(render(take(&[list.clone(), Value::int(0)])), "[]");
    assert_eq!(render(drop(&[list.clone(), Value::int(3)])), "[]");
    assert!(take(&[list.clone(), Value::int(4)]).is_err());
    assert!(drop(&[list, Value::int(-1)]).is_err());
    assert_eq!(render(take(&[text("hello"), Value::int(2)])), "\"he\"");
}

#[test]
fn test_prepend_and_append() {
    assert_eq!(
        render(prepend(&[Value::int(0), ints(&[1, 2])])),
        "[0 1 2]"
    );
    assert_eq!(render(append(&[ints(&[1, 2]), Value::int(3)])), "[1 2 3]");
    assert_eq!(
        render(append(&[ints(&[]), ints(&[])])),
        "[[]]"
    );
}

#[test]
fn test_insert() {
    let list = ints(&[1, 3]);
    assert_eq!(
        render(insert(&[list.clone(), Value::int(1), Value::int(2)])),
        "[1 2 3]"
    );
    assert_eq!(
        render(insert(&[list.clone(), Value::int(2), Value::int(4)])),
        "[1 3 4]"
    );
    assert!(insert(&[list.clone(), Value::int(3), Value::int(4)]).is_err());
    assert!(insert(&[list, Value::int(-1), Value::int(4)]).is_err());
}

#[test]
fn test_find() {
    let list = Value::list(vec![
        Value::int(1),
        Value::float(2.0),
        Value::int(1),
    ]);
    assert_eq!(render(find(&[list.clone(), Value::int(1)], false)), "0");
    assert_eq!(render(find(&[list.clone(), Value::int(1)], true)), "2");
    assert_eq!(render(find(&[list.clone(), Value::int(2)], false)), "1");
    assert_eq!(render(find(&[list, text("x")], false)), "false");
}

#[test]
fn test_range() {
    assert_eq!(
        render(range(&[Value::int(1), Value::int(7)])),
        "[1 2 3 4 5 6]"
    );
    assert_eq!(render(range(&[Value::int(3), Value::int(3)])), "[]");
    assert_eq!(
        range(&[Value::int(3), Value::int(1)]).unwrap_err().kind,
        EvalErrorKind::InvalidRange { lo: 3, hi: 1 }
    );
}

#[test]
fn test_range_too_large() {
    let whole = range(&[Value::int(0), Value::int(i64::MAX)]).unwrap_err();
    assert_eq!(whole.category(), ErrorCategory::Domain);
    assert_eq!(
        whole.kind,
        EvalErrorKind::RangeTooLarge {
            lo: 0,
            hi: i64::MAX,
            limit: MAX_RANGE_LEN
        }
    );
    assert!(range(&[Value::int(i64::MIN), Value::int(i64::MAX)]).is_err());

    let cap = i64::try_from(MAX_RANGE_LEN).unwrap();
    assert!(range(&[Value::int(-1), Value::int(cap)]).is_err());
    let top = range(&[Value::int(i64::MAX - 2), Value::int(i64::MAX)]).unwrap();
    assert_eq!(top.to_string(), format!("[{} {}]", i64::MAX - 2, i64::MAX - 1));
}

#[test]
fn test_sort() {
    let mixed = Value::list(vec![Value::float(2.5), Value::int(1), Value::int(3)]);
    assert_eq!(render(sort(&[mixed])), "[1 2.5 3]");
    let words = Value::list(vec![text("pear"), text("apple")]);
    assert_eq!(render(sort(&[words])), "[\"apple\" \"pear\"]");
    assert_eq!(render(sort(&[ints(&[])])), "[]");

    let bad = Value::list(vec![Value::int(1), text("a")]);
    assert_eq!(sort(&[bad]).unwrap_err().category(), ErrorCategory::Type);
}

#[test]
fn test_sort_rejects_nan() {
    let floats: Vec<Value> = (0..40)
        .map(|i| {
            if i % 3 == 0 {
                Value::float(f64::NAN)
            } else {
                Value::float(f64::from(40 - i) / 4.0)
            }
        })
        .collect();
    let err = sort(&[Value::list(floats)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Domain);
    assert!(err.to_string().contains("NaN"), "{err}");
}

#[test]
fn test_sort_infinities() {
    let items = Value::list(
        (0..30)
            .map(|i| match i % 3 {
                0 => Value::float(f64::INFINITY),
                1 => Value::float(f64::NEG_INFINITY),
                _ => Value::int(i64::MAX - i),
            })
            .collect(),
    );
    let sorted = sort(&[items]).unwrap();
    let sorted = sorted.as_list().unwrap();
    assert_eq!(sorted.len(), 30);
    assert_eq!(sorted[0], Value::float(f64::NEG_INFINITY));
    assert_eq!(sorted[29], Value::float(f64::INFINITY));
    assert!(sorted
        .windows(2)
        .all(|pair| pair[0].compare(&pair[1]) != Some(Ordering::Greater)));
}
