//! `not`, `assert` and `begin`.

use super::{arg, bool_at};
use crate::errors::{assertion_failed, EvalResult};
use crate::value::Value;

pub(super) fn not(args: &[Value]) -> EvalResult {
    Ok(Value::bool(!bool_at("not", args, 0)?))
}

/// `true`, or a failure if the condition is false.
pub(super) fn assert(args: &[Value]) -> EvalResult {
    if bool_at("assert", args, 0)? {
        Ok(Value::bool(true))
    } else {
        Err(assertion_failed())
    }
}

/// The last argument. Arguments are already evaluated in order.
pub(super) fn begin(args: &[Value]) -> EvalResult {
    let last = args.len().saturating_sub(1);
    arg("begin", args, last).cloned()
}
