use pretty_assertions::assert_eq;

use super::*;
use crate::errors::ErrorCategory;

#[test]
fn test_names_are_unique() {
    let mut names: Vec<_> = BuiltinOp::ALL.iter().map(|op| op.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), BuiltinOp::ALL.len());
}

#[test]
fn test_arity_floors() {
    let arity = |op: BuiltinOp| op.contract().arity;
    assert_eq!(arity(BuiltinOp::Add), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::Mul), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::Sub), Arity::AtLeast(1));
    assert_eq!(arity(BuiltinOp::Div), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::FloorDiv), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::Rem), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::Concat), Arity::AtLeast(2));
    assert_eq!(arity(BuiltinOp::Slice), Arity::Exact(3));
    assert_eq!(arity(BuiltinOp::List), Arity::AtLeast(0));
}

#[test]
fn test_sequence_builtins_accept_both_families() {
    for op in [
        BuiltinOp::IsEmpty,
        BuiltinOp::Len,
        BuiltinOp::Head,
        BuiltinOp::Tail,
        BuiltinOp::Last,
        BuiltinOp::Init,
    ] {
        let contract = op.contract();
        assert!(contract.check_types(op.name(), &[Value::string("ab")]).is_ok());
        assert!(contract
            .check_types(op.name(), &[Value::list(vec![Value::int(1)])])
            .is_ok());
        let err = contract
            .check_types(op.name(), &[Value::int(10)])
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Type, "{op}");
    }
}

#[test]
fn test_append_is_list_only() {
    let op = BuiltinOp::Append;
    let err = op
        .contract()
        .check_types(op.name(), &[Value::string("abcde"), Value::string("f")])
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn test_apply_dispatches() {
    let args = [Value::int(50), Value::int(11), Value::int(2)];
    assert_eq!(BuiltinOp::FloorDiv.apply(&args).unwrap(), Value::int(2));
    assert_eq!(
        BuiltinOp::List.apply(&args).unwrap().to_string(),
        "[50 11 2]"
    );
    assert_eq!(BuiltinOp::Begin.apply(&args).unwrap(), Value::int(2));
    assert_eq!(
        BuiltinOp::Trim.apply(&[Value::string(" x ")]).unwrap(),
        Value::string("x")
    );
    assert_eq!(
        BuiltinOp::IsUpper.apply(&[Value::string("AB")]).unwrap(),
        Value::bool(true)
    );
}

#[test]
fn test_accessors_fail_softly() {
    // apply without a contract check reports a type error instead of panicking
    let err = BuiltinOp::Len.apply(&[Value::int(3)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
    let err = BuiltinOp::Get.apply(&[Value::string("abc")]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Arity);
}
