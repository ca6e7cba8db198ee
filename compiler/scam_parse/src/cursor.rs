//! Token cursor for navigating the token stream.

use scam_ir::Span;
use scam_lexer::{Token, TokenKind};
use tracing::trace;

/// Cursor over a lexed token slice.
///
/// There is no EOF token; `current` returns `None` past the last token and
/// [`Cursor::eof_span`] locates end-of-input errors.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Span,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = tokens
            .last()
            .map_or(Span::DUMMY, |token| Span::point(token.span.end));
        Cursor {
            tokens,
            pos: 0,
            eof,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|token| &token.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Zero-length span just past the last token.
    #[inline]
    pub fn eof_span(&self) -> Span {
        self.eof
    }

    /// Span of the current token, or the EOF span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().map_or(self.eof, |token| token.span)
    }

    /// Check the current token's kind without consuming it.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, kind = %token.kind, "advance");
        self.pos += 1;
        Some(token)
    }
}
