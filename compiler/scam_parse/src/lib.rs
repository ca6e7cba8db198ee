//! Recursive descent parser for Scam.
//!
//! Grammar:
//!
//! ```text
//! program := expr*
//! expr    := INT | FLOAT | BOOL | STRING | SYMBOL
//!          | '(' expr expr* ')'
//!          | '[' expr* ']'
//! ```
//!
//! Any expression may appear in call-head position; rejecting non-symbol
//! heads is the evaluator's job. `()` is rejected here.

mod cursor;
mod error;

use scam_ir::{Expr, ExprKind, Span};
use scam_lexer::{Token, TokenKind};
use scam_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::cursor::Cursor;

pub use error::ParseError;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse every remaining expression.
    pub fn parse_all(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();
        while !self.cursor.is_at_end() {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// Parse one expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.advance() else {
            return Err(ParseError::expected_expression(self.cursor.eof_span()));
        };

        let kind = match &token.kind {
            TokenKind::Int(n) => ExprKind::Int(*n),
            TokenKind::Float(n) => ExprKind::Float(*n),
            TokenKind::Bool(b) => ExprKind::Bool(*b),
            TokenKind::Str(s) => ExprKind::Str(s.clone()),
            TokenKind::Symbol(name) => ExprKind::Symbol(name.clone()),
            TokenKind::LParen => return self.parse_call(token.span),
            TokenKind::LBracket => return self.parse_list(token.span),
            TokenKind::RParen | TokenKind::RBracket => {
                return Err(ParseError::unexpected_token(token.span, &token.kind));
            }
        };

        Ok(Expr::new(kind, token.span))
    }

    /// `(` already consumed.
    fn parse_call(&mut self, open_span: Span) -> Result<Expr, ParseError> {
        if self.cursor.check(&TokenKind::RParen) {
            let close_span = self.cursor.current_span();
            return Err(ParseError::empty_call(open_span.merge(close_span)));
        }

        let (items, close_span) = self.parse_items(open_span, '(')?;
        let span = open_span.merge(close_span);
        let mut items = items.into_iter();
        let Some(head) = items.next() else {
            return Err(ParseError::empty_call(span));
        };

        Ok(Expr::new(
            ExprKind::Call {
                head: Box::new(head),
                args: items.collect(),
            },
            span,
        ))
    }

    /// `[` already consumed.
    fn parse_list(&mut self, open_span: Span) -> Result<Expr, ParseError> {
        let (items, close_span) = self.parse_items(open_span, '[')?;
        Ok(Expr::new(ExprKind::List(items), open_span.merge(close_span)))
    }

    /// Parse expressions up to and including the delimiter closing `open`.
    ///
    /// Returns the items and the closing delimiter's span.
    fn parse_items(
        &mut self,
        open_span: Span,
        open: char,
    ) -> Result<(Vec<Expr>, Span), ParseError> {
        let closer = if open == '[' {
            TokenKind::RBracket
        } else {
            TokenKind::RParen
        };

        let mut items = Vec::new();
        loop {
            match self.cursor.current_kind() {
                None => {
                    return Err(ParseError::unclosed_delimiter(
                        open_span,
                        self.cursor.eof_span(),
                        open,
                    ));
                }
                Some(kind) if *kind == closer => {
                    let close_span = self.cursor.current_span();
                    self.cursor.advance();
                    return Ok((items, close_span));
                }
                Some(TokenKind::RParen) => {
                    return Err(ParseError::mismatched_delimiter(
                        open_span,
                        self.cursor.current_span(),
                        open,
                        ')',
                    ));
                }
                Some(TokenKind::RBracket) => {
                    return Err(ParseError::mismatched_delimiter(
                        open_span,
                        self.cursor.current_span(),
                        open,
                        ']',
                    ));
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }
    }
}

/// Parse a whole program: zero or more top-level expressions.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse_program(tokens: &[Token]) -> Result<Vec<Expr>, ParseError> {
    Parser::new(tokens).parse_all().inspect_err(|err| {
        debug!(code = %err.code, span = %err.span, "parse failed: {err}");
    })
}

/// Parse exactly one expression; anything after it is an error.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse_expr(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let result = parser.parse_expr().and_then(|expr| {
        if parser.cursor.is_at_end() {
            Ok(expr)
        } else {
            Err(ParseError::trailing_input(parser.cursor.current_span()))
        }
    });
    result.inspect_err(|err| {
        debug!(code = %err.code, span = %err.span, "parse failed: {err}");
    })
}
