//! Lexer for Scam using logos.
//!
//! Two layers:
//! - [`RawToken`](raw_token::RawToken): the logos DFA, payload-free.
//! - [`lex`]: the cooking pass that parses numeric literals, unescapes
//!   strings, drops comments, and rejects numbers glued to other text.
//!
//! Lexing stops at the first error.

mod cook_escape;
mod lex_error;
mod raw_token;

use std::fmt;

use logos::Logos;
use scam_ir::Span;

use crate::cook_escape::cook_string;
use crate::raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};

/// A cooked token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Token kinds after cooking.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Int(i64),
    Float(f64),
    Bool(bool),
    /// String literal with escapes resolved.
    Str(String),
    Symbol(String),
}

impl TokenKind {
    /// Human-readable name used in parser messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "real",
            TokenKind::Bool(_) => "boolean",
            TokenKind::Str(_) => "string",
            TokenKind::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::Float(n) => write!(f, "{n:?}"),
            TokenKind::Bool(b) => write!(f, "{b}"),
            TokenKind::Str(s) => write!(f, "{s:?}"),
            TokenKind::Symbol(name) => write!(f, "{name}"),
        }
    }
}

/// Characters that may legally follow a numeric literal.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '"' | ';')
}

/// Reject `5abc` and `1.2.3`: a number must end at a token boundary.
///
/// Returns the span of the whole offending run on failure.
fn check_number_end(source: &str, span: Span) -> Result<(), LexError> {
    let rest = source.get(span.end as usize..).unwrap_or("");
    match rest.chars().next() {
        Some(c) if !is_boundary(c) => {}
        _ => return Ok(()),
    }
    let run = rest.find(is_boundary).unwrap_or(rest.len());
    let end = span.end as usize + run;
    let bad = Span::from_range(span.start as usize..end);
    Err(LexError::invalid_number(
        bad,
        source.get(bad.to_range()).unwrap_or(""),
    ))
}

/// Tokenize `source`, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();

        let kind = match raw {
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\u{FFFD}');
                let start = span.start as usize;
                let span = Span::from_range(start..start + c.len_utf8());
                return Err(LexError::invalid_char(span, c));
            }
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBracket) => TokenKind::LBracket,
            Ok(RawToken::RBracket) => TokenKind::RBracket,
            Ok(RawToken::True) => TokenKind::Bool(true),
            Ok(RawToken::False) => TokenKind::Bool(false),
            Ok(RawToken::Int) => {
                check_number_end(source, span)?;
                let n = slice
                    .parse::<i64>()
                    .map_err(|_| LexError::invalid_number(span, slice))?;
                TokenKind::Int(n)
            }
            Ok(RawToken::Float) => {
                check_number_end(source, span)?;
                let n = slice
                    .parse::<f64>()
                    .map_err(|_| LexError::invalid_number(span, slice))?;
                TokenKind::Float(n)
            }
            Ok(RawToken::String) => {
                let content = &slice[1..slice.len() - 1];
                TokenKind::Str(cook_string(content, span.start + 1)?)
            }
            Ok(RawToken::UnterminatedString) => {
                return Err(LexError::unterminated_string(span));
            }
            Ok(RawToken::Symbol) => TokenKind::Symbol(slice.to_string()),
        };

        tokens.push(Token { kind, span });
    }

    Ok(tokens)
}
