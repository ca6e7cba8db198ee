use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_display_nested_call() {
    let expr = Expr::call(
        "+",
        vec![Expr::int(1), Expr::call("-", vec![Expr::float(2.5)])],
    );
    assert_eq!(expr.to_string(), "(+ 1 (- 2.5))");
}

#[test]
fn test_display_list_literal() {
    let expr = Expr::list(vec![
        Expr::str("a"),
        Expr::bool(true),
        Expr::list(vec![Expr::int(1), Expr::list(vec![])]),
    ]);
    assert_eq!(expr.to_string(), r#"["a" true [1 []]]"#);
}

#[test]
fn test_display_float_keeps_fraction() {
    assert_eq!(Expr::float(5.0).to_string(), "5.0");
}

#[test]
fn test_as_symbol() {
    assert_eq!(Expr::symbol("len").as_symbol(), Some("len"));
    assert_eq!(Expr::int(3).as_symbol(), None);
}

#[test]
fn test_call_head_is_symbol() {
    let ExprKind::Call { head, args } = Expr::call("len", vec![Expr::str("")]).kind else {
        panic!("expected call");
    };
    assert_eq!(head.as_symbol(), Some("len"));
    assert_eq!(args.len(), 1);
}
