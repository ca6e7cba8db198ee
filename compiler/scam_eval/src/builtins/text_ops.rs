//! Text builtins and the two renderings, `str` and `repr`.

use super::{arg, text_at};
use crate::errors::EvalResult;
use crate::value::Value;

/// Apply a text-to-text function.
pub(super) fn map_text(name: &str, args: &[Value], f: fn(&str) -> String) -> EvalResult {
    Ok(Value::string(f(text_at(name, args, 0)?)))
}

/// True iff the text has at least one cased letter and every cased letter
/// passes `case`.
pub(super) fn is_case(name: &str, args: &[Value], case: fn(char) -> bool) -> EvalResult {
    let mut cased = text_at(name, args, 0)?
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .peekable();
    let any = cased.peek().is_some();
    Ok(Value::bool(any && cased.all(case)))
}

/// Whitespace-separated words.
pub(super) fn split(args: &[Value]) -> EvalResult {
    let words = text_at("split", args, 0)?
        .split_whitespace()
        .map(Value::string)
        .collect();
    Ok(Value::list(words))
}

pub(super) fn str(args: &[Value]) -> EvalResult {
    Ok(Value::string(arg("str", args, 0)?.display_text()))
}

pub(super) fn repr(args: &[Value]) -> EvalResult {
    Ok(Value::string(arg("repr", args, 0)?.to_string()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
