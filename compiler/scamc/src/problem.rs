//! Everything that can go wrong between reading a source and printing a
//! value, as one type.
//!
//! Each phase keeps its own error type; `Problem` only wraps them so the
//! commands can report any of them through the same emitter.

use std::io;
use std::path::PathBuf;

use scam_diagnostic::{Diagnostic, ErrorCode};
use scam_eval::EvalError;
use scam_lexer::LexError;
use scam_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Problem {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Problem {
    #[cold]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Problem::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the source was well-formed and evaluation itself failed.
    pub fn is_eval(&self) -> bool {
        matches!(self, Problem::Eval(_))
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Problem::Lex(err) => err.error_code(),
            Problem::Parse(err) => err.code,
            Problem::Eval(err) => err.error_code(),
            Problem::Io { .. } => ErrorCode::E9001,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Lex(err) => err.to_diagnostic(),
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Eval(err) => err.to_diagnostic(),
            Problem::Io { .. } => {
                Diagnostic::error(ErrorCode::E9001).with_message(self.to_string())
            }
        }
    }
}
