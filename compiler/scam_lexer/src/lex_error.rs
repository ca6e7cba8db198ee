//! Lexer error types.

use scam_diagnostic::{Diagnostic, ErrorCode};
use scam_ir::Span;
use thiserror::Error;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("invalid character `{0}`")]
    InvalidChar(char),
    /// Digits glued to other characters (`5abc`, `1.2.3`) or an integer
    /// that does not fit in 64 bits.
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    /// Escape other than `\" \\ \n \t \r \0`.
    #[error("invalid escape sequence `\\{0}` in string literal")]
    InvalidEscape(char),
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_char(span: Span, c: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidChar(c),
        }
    }

    #[cold]
    pub fn invalid_number(span: Span, text: impl Into<String>) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidNumber(text.into()),
        }
    }

    #[cold]
    pub fn invalid_escape(span: Span, escape_char: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidEscape(escape_char),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidChar(_) => ErrorCode::E0002,
            LexErrorKind::InvalidNumber(_) => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::InvalidChar(_) => "not part of any token",
            LexErrorKind::InvalidNumber(_) => "not a valid number",
            LexErrorKind::InvalidEscape(_) => "unknown escape",
        };
        let diag = Diagnostic::error(self.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are \\\" \\\\ \\n \\t \\r \\0")
            }
            _ => diag,
        }
    }
}
