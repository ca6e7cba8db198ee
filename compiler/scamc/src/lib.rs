//! Scam front end.
//!
//! Glues the phase crates together and implements the `scam` binary's
//! commands as plain functions over writers, so they can be driven from
//! tests as well as from `main`.
//!
//! ```text
//! source ──► scam_lexer::lex ──► scam_parse ──► Interpreter::eval ──► Value
//!                  │                  │                 │
//!                  └──────────────────┴─────────────────┴──► Problem ──► Diagnostic
//! ```

pub mod commands;
pub mod config;
pub mod problem;
pub mod transcript;
mod tracing_setup;

use scam_eval::{Interpreter, Value};
use scam_ir::Expr;

pub use config::RunConfig;
pub use problem::Problem;
pub use tracing_setup::init_tracing;

/// Lex, parse and evaluate a single expression.
pub fn eval_source(interpreter: &Interpreter, source: &str) -> Result<Value, Problem> {
    let tokens = scam_lexer::lex(source)?;
    let expr = scam_parse::parse_expr(&tokens)?;
    Ok(interpreter.eval(&expr)?)
}

/// Lex and parse every top-level expression of a program.
pub fn parse_source(source: &str) -> Result<Vec<Expr>, Problem> {
    let tokens = scam_lexer::lex(source)?;
    Ok(scam_parse::parse_program(&tokens)?)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
