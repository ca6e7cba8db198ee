//! Scam IR - shared data types for the Scam front end and evaluator.
//!
//! This crate owns the two types every other phase agrees on:
//!
//! - [`Span`]: a compact byte range into the source text
//! - [`Expr`]: the parsed expression tree handed from the parser to the
//!   evaluator
//!
//! It has no dependencies so that tools (formatters, highlighters, test
//! harnesses) can build expression trees without pulling in the evaluator.

mod expr;
mod span;

pub use expr::{Expr, ExprKind};
pub use span::Span;
