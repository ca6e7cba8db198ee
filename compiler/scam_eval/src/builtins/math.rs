//! `ceil floor abs divmod sqrt pow ln log`.

use super::{int_at, number_at};
use crate::errors::{division_by_zero, integer_overflow, math_domain, EvalError, EvalResult};
use crate::numeric::{self, Number};
use crate::value::Value;

/// `ceil` and `floor`: Int result, Int input passes through.
pub(super) fn round(name: &'static str, args: &[Value], round: fn(f64) -> f64) -> EvalResult {
    match number_at(name, args, 0)? {
        Number::Int(n) => Ok(Value::int(n)),
        Number::Float(n) => numeric::float_to_int(name, n, round).map(Value::int),
    }
}

pub(super) fn abs(args: &[Value]) -> EvalResult {
    match number_at("abs", args, 0)? {
        Number::Int(n) => n
            .checked_abs()
            .map(Value::int)
            .ok_or_else(|| integer_overflow("absolute value")),
        Number::Float(n) => Ok(Value::float(n.abs())),
    }
}

/// `[quotient remainder]` with floor semantics.
pub(super) fn divmod(args: &[Value]) -> EvalResult {
    let a = int_at("divmod", args, 0)?;
    let b = int_at("divmod", args, 1)?;
    if b == 0 {
        return Err(division_by_zero());
    }
    let q = numeric::floor_div(a, b)?;
    let r = numeric::floor_rem(a, b);
    Ok(Value::list(vec![Value::int(q), Value::int(r)]))
}

pub(super) fn sqrt(args: &[Value]) -> EvalResult {
    let x = number_at("sqrt", args, 0)?.to_f64();
    if x < 0.0 {
        return Err(math_domain("sqrt", "square root of a negative number"));
    }
    Ok(Value::float(x.sqrt()))
}

/// Int when both operands are Int and the exponent is not negative.
pub(super) fn pow(args: &[Value]) -> EvalResult {
    let base = number_at("pow", args, 0)?;
    let exponent = number_at("pow", args, 1)?;

    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            return int_pow(b, e).map(Value::int);
        }
    }

    let result = base.to_f64().powf(exponent.to_f64());
    if result.is_nan() && !base.to_f64().is_nan() && !exponent.to_f64().is_nan() {
        return Err(math_domain("pow", "result is not a real number"));
    }
    Ok(Value::float(result))
}

fn int_pow(base: i64, exponent: i64) -> Result<i64, EvalError> {
    match base {
        0 if exponent == 0 => Ok(1),
        0 | 1 => Ok(base),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or_else(|| integer_overflow("exponentiation")),
    }
}

pub(super) fn ln(args: &[Value]) -> EvalResult {
    let x = number_at("ln", args, 0)?.to_f64();
    if x <= 0.0 {
        return Err(math_domain("ln", "logarithm of a non-positive number"));
    }
    Ok(Value::float(x.ln()))
}

/// `(log x base)`.
#[expect(clippy::float_cmp, reason = "only an exact base of 1 is undefined")]
pub(super) fn log(args: &[Value]) -> EvalResult {
    let x = number_at("log", args, 0)?.to_f64();
    let base = number_at("log", args, 1)?.to_f64();
    if x <= 0.0 || base <= 0.0 {
        return Err(math_domain("log", "logarithm of a non-positive number"));
    }
    if base == 1.0 {
        return Err(math_domain("log", "logarithm base cannot be 1"));
    }
    Ok(Value::float(x.ln() / base.ln()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
