use pretty_assertions::assert_eq;

use super::*;

fn text(s: &str) -> Value {
    Value::string(s)
}

fn render(result: EvalResult) -> String {
    result.unwrap().to_string()
}

#[test]
fn test_case_mapping() {
    assert_eq!(
        render(map_text("upper", &[text("Hello!")], str::to_uppercase)),
        "\"HELLO!\""
    );
    assert_eq!(
        render(map_text("lower", &[text("ÀB")], str::to_lowercase)),
        "\"àb\""
    );
}

#[test]
fn test_case_predicates() {
    let upper = |s: &str| render(is_case("isupper", &[text(s)], char::is_uppercase));
    let lower = |s: &str| render(is_case("islower", &[text(s)], char::is_lowercase));
    assert_eq!(upper("ABC 1!"), "true");
    assert_eq!(upper("AbC"), "false");
    assert_eq!(upper("123"), "false");
    assert_eq!(upper(""), "false");
    assert_eq!(lower("abc def"), "true");
    assert_eq!(lower("abC"), "false");
}

#[test]
fn test_trim() {
    assert_eq!(
        render(map_text("trim", &[text("  a b \n")], |s| s.trim().to_string())),
        "\"a b\""
    );
}

#[test]
fn test_split() {
    assert_eq!(
        render(split(&[text("  the quick\tbrown\nfox ")])),
        "[\"the\" \"quick\" \"brown\" \"fox\"]"
    );
    assert_eq!(render(split(&[text("   ")])), "[]");
}

#[test]
fn test_str_and_repr() {
    assert_eq!(render(str(&[text("a\"b")])), "\"a\\\"b\"");
    assert_eq!(
        str(&[text("hi")]).unwrap().as_str().map(ToString::to_string),
        Some("hi".to_string())
    );
    assert_eq!(
        repr(&[text("hi")]).unwrap().as_str().map(ToString::to_string),
        Some("\"hi\"".to_string())
    );
    assert_eq!(
        str(&[Value::list(vec![Value::float(1.0), text("x")])])
            .unwrap()
            .as_str()
            .map(ToString::to_string),
        Some("[1.0 \"x\"]".to_string())
    );
}
