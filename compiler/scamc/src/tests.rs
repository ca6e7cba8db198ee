use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_eval_source() {
    let interpreter = Interpreter::new();
    let value = eval_source(&interpreter, "(+ 1 2 3.0)").unwrap();
    assert_eq!(value.to_string(), "6.0");
}

#[test]
fn test_eval_source_reports_each_phase() {
    let interpreter = Interpreter::new();
    assert!(matches!(
        eval_source(&interpreter, "(/ 10 'abc')"),
        Err(Problem::Lex(_))
    ));
    assert!(matches!(
        eval_source(&interpreter, "(+ 1 2"),
        Err(Problem::Parse(_))
    ));
    assert!(matches!(
        eval_source(&interpreter, "(/ 1 0)"),
        Err(Problem::Eval(_))
    ));
}

#[test]
fn test_parse_source_keeps_order() {
    let exprs = parse_source("1 ; one\n(+ 1 1)\n[3]").unwrap();
    assert_eq!(exprs.len(), 3);
    assert_eq!(exprs[0].kind, scam_ir::ExprKind::Int(1));
    assert!(exprs[2].span.start > exprs[1].span.start);
}
