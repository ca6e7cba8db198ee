//! Scam Eval - value model, builtin library and evaluator.
//!
//! This crate evaluates parsed [`scam_ir::Expr`] trees against a fixed set
//! of builtin operators. It does not parse; front ends hand it trees from
//! `scam_parse`.
//!
//! # Architecture
//!
//! - [`Value`]: immutable runtime values with family-aware equality
//! - [`numeric`]: the Int/Float tower and floor division rules
//! - [`Sequence`]: one interface over text and lists
//! - [`builtins`]: the operator enum, its contracts and implementations
//! - [`Interpreter`]: the lookup → arity → arguments → types → compute
//!   pipeline
//! - [`errors`]: `EvalError` with categories and diagnostic codes

pub mod builtins;
pub mod errors;
mod interpreter;
pub mod numeric;
mod sequence;
mod value;

pub use builtins::{BuiltinOp, BuiltinRegistry};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use sequence::{Sequence, SequenceFamily};
pub use value::{Heap, Value};
