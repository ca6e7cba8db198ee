//! `+ - * / // %`: left folds over the numeric tower.
//!
//! `+ - *` stay in Int while every operand is Int and switch to Float
//! otherwise. `/` is always Float. `//` and `%` are Int only. Zero divisors
//! are rejected before any folding, so `(/ 10 23 0)` fails without computing
//! `10 / 23`.

use tracing::trace;

use super::{int_at, number_at, numbers};
use crate::errors::{division_by_zero, integer_overflow, modulo_by_zero, EvalError, EvalResult};
use crate::numeric::{self, Number};
use crate::value::Value;

/// Fold `numbers` left to right, in Int when every operand is Int.
fn fold(
    numbers: &[Number],
    operation: &'static str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> EvalResult {
    let ints: Option<Vec<i64>> = numbers
        .iter()
        .map(|n| match n {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        })
        .collect();

    match ints {
        Some(ints) => {
            let Some((&first, rest)) = ints.split_first() else {
                return Ok(Value::int(0));
            };
            let total = rest.iter().try_fold(first, |acc, &n| {
                int_op(acc, n).ok_or_else(|| integer_overflow(operation))
            })?;
            Ok(Value::int(total))
        }
        None => {
            let mut floats = numbers.iter().map(|n| n.to_f64());
            let first = floats.next().unwrap_or(0.0);
            Ok(Value::float(floats.fold(first, float_op)))
        }
    }
}

pub(super) fn add(args: &[Value]) -> EvalResult {
    fold(&numbers("+", args)?, "addition", i64::checked_add, |a, b| a + b)
}

pub(super) fn mul(args: &[Value]) -> EvalResult {
    fold(
        &numbers("*", args)?,
        "multiplication",
        i64::checked_mul,
        |a, b| a * b,
    )
}

/// Unary negation, or a left fold of subtraction.
pub(super) fn sub(args: &[Value]) -> EvalResult {
    if let [_] = args {
        return match number_at("-", args, 0)? {
            Number::Int(n) => n
                .checked_neg()
                .map(Value::int)
                .ok_or_else(|| integer_overflow("negation")),
            Number::Float(n) => Ok(Value::float(-n)),
        };
    }
    fold(
        &numbers("-", args)?,
        "subtraction",
        i64::checked_sub,
        |a, b| a - b,
    )
}

pub(super) fn div(args: &[Value]) -> EvalResult {
    let numbers = numbers("/", args)?;
    if numbers.iter().skip(1).any(|n| n.is_zero()) {
        trace!("zero divisor");
        return Err(division_by_zero());
    }

    let mut floats = numbers.iter().map(|n| n.to_f64());
    let first = floats.next().unwrap_or(0.0);
    Ok(Value::float(floats.fold(first, |a, b| a / b)))
}

fn int_fold(
    name: &'static str,
    args: &[Value],
    on_zero: fn() -> EvalError,
    step: fn(i64, i64) -> Result<i64, EvalError>,
) -> EvalResult {
    let ints = (0..args.len())
        .map(|position| int_at(name, args, position))
        .collect::<Result<Vec<_>, _>>()?;
    if ints.iter().skip(1).any(|&n| n == 0) {
        trace!("zero divisor");
        return Err(on_zero());
    }

    let Some((&first, rest)) = ints.split_first() else {
        return Ok(Value::int(0));
    };
    rest.iter()
        .try_fold(first, |acc, &n| step(acc, n))
        .map(Value::int)
}

pub(super) fn floor_div(args: &[Value]) -> EvalResult {
    int_fold("//", args, division_by_zero, numeric::floor_div)
}

pub(super) fn rem(args: &[Value]) -> EvalResult {
    int_fold("%", args, modulo_by_zero, |a, b| Ok(numeric::floor_rem(a, b)))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
