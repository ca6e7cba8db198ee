//! Stack growth for the recursive parser and evaluator.
//!
//! Both `scam_parse` and `scam_eval` recurse once per nesting level of the
//! input. A pathological input such as ten thousand nested `(len (len ...))`
//! calls would otherwise overflow the native stack long before any size
//! limit kicks in. Each recursive step wraps itself in
//! [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the current one runs low.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
