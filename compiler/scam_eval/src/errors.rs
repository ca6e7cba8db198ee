//! Evaluation errors.
//!
//! # Structured error kinds
//!
//! `EvalErrorKind` carries the data for each failure so callers can match on
//! the kind instead of parsing messages. Every kind belongs to one
//! [`ErrorCategory`] and maps to one E6xxx code.
//!
//! The `#[cold]` factory functions at the bottom of this module are the
//! intended way to build errors; builtins call them and the interpreter
//! attaches spans afterwards.

use std::fmt;

use scam_diagnostic::{Diagnostic, ErrorCode};
use scam_ir::Span;
use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse classification of a failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A symbol that names nothing.
    Name,
    /// Wrong number of arguments.
    Arity,
    /// An argument of the wrong family.
    Type,
    /// A well-typed argument outside the operator's accepted range.
    Domain,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Name => "NameError",
            ErrorCategory::Arity => "ArityError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Domain => "DomainError",
        })
    }
}

/// Typed failure kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Name
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },
    #[error("unbound symbol '{name}'")]
    UnboundSymbol { name: String },

    // Arity
    #[error("'{name}' got {got} arg(s), expected {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("'{name}' got {got} arg(s), expected at least {min}")]
    TooFewArguments { name: String, min: usize, got: usize },

    // Type
    /// `position` is zero-based; the message counts from one.
    #[error("argument {} of '{name}' must be {expected}, got {got}", .position + 1)]
    ArgumentType {
        name: String,
        position: usize,
        expected: String,
        got: String,
    },
    #[error("'{name}' cannot mix str and list arguments")]
    MixedSequences { name: String },
    #[error("value of type {type_name} is not callable")]
    NotCallable { type_name: String },
    #[error("'{name}' cannot compare {left} with {right}")]
    Incomparable {
        name: String,
        left: String,
        right: String,
    },

    // Domain
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },
    #[error("math domain error in '{name}': {reason}")]
    MathDomain { name: String, reason: String },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("slice bounds {lo}..{hi} out of range for length {len}")]
    SliceOutOfBounds { lo: i64, hi: i64, len: usize },
    #[error("'{name}' count {count} out of range for length {len}")]
    CountOutOfBounds { name: String, count: i64, len: usize },
    #[error("'{name}' of an empty sequence")]
    EmptySequence { name: String },
    #[error(
        "lower bound {lo} must be less than or equal to upper bound {hi} in function 'range'"
    )]
    InvalidRange { lo: i64, hi: i64 },
    #[error("range {lo}..{hi} has more than {limit} elements")]
    RangeTooLarge { lo: i64, hi: i64, limit: usize },
    #[error("failed assert")]
    AssertionFailed,
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalErrorKind::UnknownOperator { .. } | EvalErrorKind::UnboundSymbol { .. } => {
                ErrorCategory::Name
            }
            EvalErrorKind::ArityMismatch { .. } | EvalErrorKind::TooFewArguments { .. } => {
                ErrorCategory::Arity
            }
            EvalErrorKind::ArgumentType { .. }
            | EvalErrorKind::MixedSequences { .. }
            | EvalErrorKind::NotCallable { .. }
            | EvalErrorKind::Incomparable { .. } => ErrorCategory::Type,
            EvalErrorKind::DivisionByZero
            | EvalErrorKind::ModuloByZero
            | EvalErrorKind::IntegerOverflow { .. }
            | EvalErrorKind::MathDomain { .. }
            | EvalErrorKind::IndexOutOfBounds { .. }
            | EvalErrorKind::SliceOutOfBounds { .. }
            | EvalErrorKind::CountOutOfBounds { .. }
            | EvalErrorKind::EmptySequence { .. }
            | EvalErrorKind::InvalidRange { .. }
            | EvalErrorKind::RangeTooLarge { .. }
            | EvalErrorKind::AssertionFailed => ErrorCategory::Domain,
        }
    }
}

/// An evaluation failure, optionally located in the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Which argument the error is about, for errors that blame one.
    pub fn argument_position(&self) -> Option<usize> {
        match self.kind {
            EvalErrorKind::ArgumentType { position, .. } => Some(position),
            _ => None,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match &self.kind {
            EvalErrorKind::DivisionByZero => ErrorCode::E6001,
            EvalErrorKind::ModuloByZero => ErrorCode::E6002,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6003,
            EvalErrorKind::MathDomain { .. } => ErrorCode::E6004,
            EvalErrorKind::ArgumentType { .. } => ErrorCode::E6010,
            EvalErrorKind::MixedSequences { .. } => ErrorCode::E6011,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6012,
            EvalErrorKind::Incomparable { .. } => ErrorCode::E6013,
            EvalErrorKind::UnknownOperator { .. } => ErrorCode::E6020,
            EvalErrorKind::UnboundSymbol { .. } => ErrorCode::E6021,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E6025,
            EvalErrorKind::SliceOutOfBounds { .. } | EvalErrorKind::CountOutOfBounds { .. } => {
                ErrorCode::E6026
            }
            EvalErrorKind::EmptySequence { .. } => ErrorCode::E6027,
            EvalErrorKind::InvalidRange { .. } => ErrorCode::E6028,
            EvalErrorKind::RangeTooLarge { .. } => ErrorCode::E6029,
            EvalErrorKind::ArityMismatch { .. } | EvalErrorKind::TooFewArguments { .. } => {
                ErrorCode::E6030
            }
            EvalErrorKind::AssertionFailed => ErrorCode::E6050,
        }
    }

    /// Short text for the caret under the span.
    pub fn primary_label(&self) -> String {
        match &self.kind {
            EvalErrorKind::UnknownOperator { .. } => "not a builtin".to_string(),
            EvalErrorKind::UnboundSymbol { .. } => "not bound to a value".to_string(),
            EvalErrorKind::ArityMismatch { expected, .. } => {
                format!("expected {expected} argument(s)")
            }
            EvalErrorKind::TooFewArguments { min, .. } => {
                format!("expected at least {min} argument(s)")
            }
            EvalErrorKind::ArgumentType { expected, got, .. } => {
                format!("expected {expected}, found {got}")
            }
            EvalErrorKind::MixedSequences { .. } => "different sequence family".to_string(),
            EvalErrorKind::NotCallable { .. } => "not an operator".to_string(),
            EvalErrorKind::Incomparable { .. } => "values are not ordered".to_string(),
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => {
                "divisor is zero".to_string()
            }
            EvalErrorKind::IntegerOverflow { .. } => "result does not fit in an int".to_string(),
            EvalErrorKind::MathDomain { .. } => "outside the function's domain".to_string(),
            EvalErrorKind::IndexOutOfBounds { .. }
            | EvalErrorKind::SliceOutOfBounds { .. }
            | EvalErrorKind::CountOutOfBounds { .. } => "out of bounds".to_string(),
            EvalErrorKind::EmptySequence { .. } => "sequence is empty".to_string(),
            EvalErrorKind::InvalidRange { .. } => "empty range bounds reversed".to_string(),
            EvalErrorKind::RangeTooLarge { limit, .. } => format!("more than {limit} elements"),
            EvalErrorKind::AssertionFailed => "assertion is false".to_string(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.error_code()).with_message(self.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.primary_label());
        }

        match &self.kind {
            EvalErrorKind::UnboundSymbol { .. } => {
                diag.with_note("symbols name operators and are only valid in call position")
            }
            EvalErrorKind::NotCallable { .. } => {
                diag.with_note("a call must start with an operator name, e.g. `(len x)`")
            }
            EvalErrorKind::ModuloByZero => diag.with_note("`%` and `//` need a nonzero divisor"),
            _ => diag,
        }
    }
}

// Name errors

#[cold]
pub fn unknown_operator(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        name: name.to_string(),
    })
}

#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Arity errors

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn too_few_arguments(name: &str, min: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooFewArguments {
        name: name.to_string(),
        min,
        got,
    })
}

// Type errors

#[cold]
pub fn argument_type(name: &str, position: usize, expected: &str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentType {
        name: name.to_string(),
        position,
        expected: expected.to_string(),
        got: got.type_name().to_string(),
    })
}

#[cold]
pub fn mixed_sequences(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MixedSequences {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn incomparable(name: &str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Incomparable {
        name: name.to_string(),
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    })
}

// Domain errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn math_domain(name: &str, reason: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MathDomain {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn slice_out_of_bounds(lo: i64, hi: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SliceOutOfBounds { lo, hi, len })
}

#[cold]
pub fn count_out_of_bounds(name: &str, count: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CountOutOfBounds {
        name: name.to_string(),
        count,
        len,
    })
}

#[cold]
pub fn empty_sequence(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptySequence {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_range(lo: i64, hi: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidRange { lo, hi })
}

#[cold]
pub fn range_too_large(lo: i64, hi: i64, limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RangeTooLarge { lo, hi, limit })
}

#[cold]
pub fn assertion_failed() -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssertionFailed)
}
