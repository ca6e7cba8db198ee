//! Builtins over the [`Sequence`] interface, plus the list-only ones.
//!
//! Bounds follow one policy: an index or count outside the sequence is a
//! domain error, never clamped.

use std::cmp::Ordering;

use super::{arg, int_at, list_at, sequence_at};
use crate::errors::{
    count_out_of_bounds, empty_sequence, incomparable, index_out_of_bounds, invalid_range,
    math_domain, mixed_sequences, range_too_large, slice_out_of_bounds, EvalError, EvalResult,
};
use crate::numeric::usize_to_int;
use crate::sequence::Sequence;
use crate::value::Value;

pub(super) fn is_empty(args: &[Value]) -> EvalResult {
    Ok(Value::bool(sequence_at("empty?", args, 0)?.is_empty()))
}

pub(super) fn len(args: &[Value]) -> EvalResult {
    usize_to_int(sequence_at("len", args, 0)?.len()).map(Value::int)
}

pub(super) fn head(args: &[Value]) -> EvalResult {
    sequence_at("head", args, 0)?
        .first()
        .ok_or_else(|| empty_sequence("head"))
}

pub(super) fn last(args: &[Value]) -> EvalResult {
    sequence_at("last", args, 0)?
        .last()
        .ok_or_else(|| empty_sequence("last"))
}

/// All but the first element; empty stays empty.
pub(super) fn tail(args: &[Value]) -> EvalResult {
    let seq = sequence_at("tail", args, 0)?;
    let len = seq.len();
    Ok(seq.slice(len.min(1), len))
}

/// All but the last element; empty stays empty.
pub(super) fn init(args: &[Value]) -> EvalResult {
    let seq = sequence_at("init", args, 0)?;
    Ok(seq.slice(0, seq.len().saturating_sub(1)))
}

pub(super) fn concat(args: &[Value]) -> EvalResult {
    let seq = sequence_at("concat", args, 0)?;
    let rest = args.get(1..).unwrap_or_default();
    seq.concat(rest).ok_or_else(|| mixed_sequences("concat"))
}

/// An index into `0..len`, or `None`.
fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// A count in `0..=len`, or an error naming `name`.
fn checked_count(name: &str, count: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n <= len)
        .ok_or_else(|| count_out_of_bounds(name, count, len))
}

pub(super) fn get(args: &[Value]) -> EvalResult {
    let seq = sequence_at("get", args, 0)?;
    let index = int_at("get", args, 1)?;
    usize::try_from(index)
        .ok()
        .and_then(|i| seq.nth(i))
        .ok_or_else(|| index_out_of_bounds(index, seq.len()))
}

/// Half-open `[lo, hi)`; requires `0 <= lo <= hi <= len`.
pub(super) fn slice(args: &[Value]) -> EvalResult {
    let seq = sequence_at("slice", args, 0)?;
    let lo = int_at("slice", args, 1)?;
    let hi = int_at("slice", args, 2)?;
    let len = seq.len();

    match (usize::try_from(lo), usize::try_from(hi)) {
        (Ok(l), Ok(h)) if l <= h && h <= len => Ok(seq.slice(l, h)),
        _ => Err(slice_out_of_bounds(lo, hi, len)),
    }
}

pub(super) fn take(args: &[Value]) -> EvalResult {
    let seq = sequence_at("take", args, 0)?;
    let n = checked_count("take", int_at("take", args, 1)?, seq.len())?;
    Ok(seq.slice(0, n))
}

pub(super) fn drop(args: &[Value]) -> EvalResult {
    let seq = sequence_at("drop", args, 0)?;
    let len = seq.len();
    let n = checked_count("drop", int_at("drop", args, 1)?, len)?;
    Ok(seq.slice(n, len))
}

// List-only

pub(super) fn prepend(args: &[Value]) -> EvalResult {
    let elem = arg("prepend", args, 0)?;
    let list = list_at("prepend", args, 1)?;
    let mut items = Vec::with_capacity(list.len() + 1);
    items.push(elem.clone());
    items.extend_from_slice(list);
    Ok(Value::list(items))
}

pub(super) fn append(args: &[Value]) -> EvalResult {
    let list = list_at("append", args, 0)?;
    let elem = arg("append", args, 1)?;
    let mut items = Vec::with_capacity(list.len() + 1);
    items.extend_from_slice(list);
    items.push(elem.clone());
    Ok(Value::list(items))
}

/// `(insert list index elem)`, with `index` in `0..=len`.
pub(super) fn insert(args: &[Value]) -> EvalResult {
    let list = list_at("insert", args, 0)?;
    let index = int_at("insert", args, 1)?;
    let elem = arg("insert", args, 2)?;

    let at = checked_index(index, list.len() + 1)
        .ok_or_else(|| index_out_of_bounds(index, list.len()))?;
    let mut items = list.to_vec();
    items.insert(at, elem.clone());
    Ok(Value::list(items))
}

/// Index of the first (or last) element equal to the datum, else `false`.
pub(super) fn find(args: &[Value], from_end: bool) -> EvalResult {
    let name = if from_end { "rfind" } else { "find" };
    let list = list_at(name, args, 0)?;
    let datum = arg(name, args, 1)?;

    let found = if from_end {
        list.iter().rposition(|item| item.equals(datum))
    } else {
        list.iter().position(|item| item.equals(datum))
    };
    match found {
        Some(i) => usize_to_int(i).map(Value::int),
        None => Ok(Value::bool(false)),
    }
}

/// Longest list `range` builds.
const MAX_RANGE_LEN: usize = 1 << 24;

/// `[lo, hi)` as a list of Ints.
pub(super) fn range(args: &[Value]) -> EvalResult {
    let lo = int_at("range", args, 0)?;
    let hi = int_at("range", args, 1)?;
    if lo > hi {
        return Err(invalid_range(lo, hi));
    }
    // `hi - lo` can exceed i64::MAX, but never u64::MAX.
    let span = hi.abs_diff(lo);
    if !usize::try_from(span).is_ok_and(|n| n <= MAX_RANGE_LEN) {
        return Err(range_too_large(lo, hi, MAX_RANGE_LEN));
    }
    Ok(Value::list((lo..hi).map(Value::int).collect()))
}

/// Ascending sort of a list of numbers or a list of texts.
///
/// NaN has no place in the order and is rejected, so the comparator below
/// is total.
pub(super) fn sort(args: &[Value]) -> EvalResult {
    let list = list_at("sort", args, 0)?;
    if let Some(first) = list.first() {
        if let Some(odd) = list.iter().find(|item| !super::comparable(first, item)) {
            return Err(incomparable("sort", first, odd));
        }
    }
    if list.iter().any(|item| matches!(item, Value::Float(f) if f.is_nan())) {
        return Err(math_domain("sort", "NaN cannot be ordered"));
    }

    let mut items = list.to_vec();
    items.sort_by(|a, b| a.compare(b).unwrap_or(Ordering::Equal));
    Ok(Value::list(items))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
