//! The numeric tower: Int and Float as one family.
//!
//! Mixed-family comparisons are exact. An Int is never rounded to f64 to
//! compare it with a Float, so `(= 9007199254740993 9007199254740992.0)` is
//! false even though both sides round to the same double.
//!
//! Integer division and remainder floor toward negative infinity, so
//! `a == floor_div(a, b) * b + floor_rem(a, b)` for every nonzero `b`.

use std::cmp::Ordering;

use crate::errors::{integer_overflow, math_domain, EvalError};

/// A value from the numeric family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// 2^63 as f64: the first double above `i64::MAX`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Float arithmetic on an Int operand is the promotion rule"
    )]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }

    /// Exact ordering across the family. `None` if either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "f is integral and inside the i64 range here"
)]
fn compare_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    let fraction = f - whole;
    let by_whole = i.cmp(&(whole as i64));
    Some(by_whole.then(if fraction > 0.0 {
        Ordering::Less
    } else if fraction < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }))
}

/// Integer division rounding toward negative infinity.
///
/// The divisor must be nonzero; callers check zero divisors up front.
pub fn floor_div(a: i64, b: i64) -> Result<i64, EvalError> {
    let q = a
        .checked_div(b)
        .ok_or_else(|| integer_overflow("floor division"))?;
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Remainder taking the sign of the divisor. Never overflows.
pub fn floor_rem(a: i64, b: i64) -> i64 {
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

/// Round a Float to an Int with `round`, rejecting values outside i64.
#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked before the cast"
)]
pub fn float_to_int(
    name: &'static str,
    n: f64,
    round: fn(f64) -> f64,
) -> Result<i64, EvalError> {
    let rounded = round(n);
    if rounded.is_nan() || rounded >= TWO_POW_63 || rounded < -TWO_POW_63 {
        return Err(math_domain(name, "value is out of integer range"));
    }
    Ok(rounded as i64)
}

/// Convert a length or index to an Int.
pub fn usize_to_int(n: usize) -> Result<i64, EvalError> {
    i64::try_from(n).map_err(|_| integer_overflow("length"))
}
