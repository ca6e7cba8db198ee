//! Diagnostic system for Scam error reporting.
//!
//! Every failure the front end can surface (lexing, parsing, evaluation)
//! is converted into one [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary label pointing at where it went wrong
//! - optional notes
//!
//! The phase crates own the conversion from their error types; this crate
//! only knows about spans and text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
