//! `=` and the orderings `< > <= >=`.

use std::cmp::Ordering;

use super::arg;
use crate::errors::{incomparable, EvalResult};
use crate::value::Value;

/// Structural equality. Never fails for well-formed calls.
pub(super) fn equal(args: &[Value]) -> EvalResult {
    let left = arg("=", args, 0)?;
    let right = arg("=", args, 1)?;
    Ok(Value::bool(left.equals(right)))
}

/// Apply `test` to the ordering of two numbers or two texts.
///
/// Comparisons involving NaN are false.
pub(super) fn ordered(name: &str, args: &[Value], test: fn(Ordering) -> bool) -> EvalResult {
    let left = arg(name, args, 0)?;
    let right = arg(name, args, 1)?;
    if !super::comparable(left, right) {
        return Err(incomparable(name, left, right));
    }
    Ok(Value::bool(left.compare(right).is_some_and(test)))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
