//! Parse error types.

use scam_diagnostic::{Diagnostic, ErrorCode, Label};
use scam_ir::Span;
use scam_lexer::TokenKind;
use thiserror::Error;

/// Parse error with code, location, and an optional related location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Text of the primary label.
    pub label: String,
    /// Related location, e.g. the opening delimiter of an unclosed call.
    pub related: Option<Label>,
    /// Optional help messages.
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            label: "here".to_string(),
            related: None,
            help: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some(Label::secondary(span, message));
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// A token that cannot appear where it was found.
    #[cold]
    pub fn unexpected_token(span: Span, found: &TokenKind) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("unexpected {}", found.display_name()),
            span,
        )
        .with_label("unexpected token")
    }

    /// Input ended where an expression was required.
    #[cold]
    pub fn expected_expression(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            "expected expression, found end of input",
            span,
        )
        .with_label("expected expression here")
    }

    /// Input ended before `open` was closed.
    #[cold]
    pub fn unclosed_delimiter(open_span: Span, eof_span: Span, open: char) -> Self {
        let close = closing_for(open);
        ParseError::new(ErrorCode::E1003, format!("unclosed delimiter `{open}`"), eof_span)
            .with_label(format!("expected `{close}`"))
            .with_related(open_span, "opened here")
    }

    /// A closing delimiter that does not match the innermost opener.
    #[cold]
    pub fn mismatched_delimiter(
        open_span: Span,
        close_span: Span,
        open: char,
        found: char,
    ) -> Self {
        let close = closing_for(open);
        ParseError::new(
            ErrorCode::E1001,
            format!("mismatched closing delimiter: expected `{close}`, found `{found}`"),
            close_span,
        )
        .with_label(format!("expected `{close}`"))
        .with_related(open_span, "opened here")
    }

    /// `()`: a call with no operator.
    #[cold]
    pub fn empty_call(span: Span) -> Self {
        ParseError::new(ErrorCode::E1004, "empty call `()`", span)
            .with_label("a call needs an operator")
            .with_help("write an empty list as `[]`")
    }

    /// More than one expression where exactly one was expected.
    #[cold]
    pub fn trailing_input(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            "unexpected input after the expression",
            span,
        )
        .with_label("expected end of input")
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, &self.label);

        if let Some(related) = &self.related {
            diag.labels.push(related.clone());
        }

        for help in &self.help {
            diag = diag.with_note(help);
        }

        diag
    }
}

fn closing_for(open: char) -> char {
    match open {
        '[' => ']',
        _ => ')',
    }
}
