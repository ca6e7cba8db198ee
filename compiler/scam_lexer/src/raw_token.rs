//! Raw Token Definition
//!
//! The logos-derived tokenizer output before literal values are parsed and
//! string escapes are cooked.

use logos::Logos;

/// Raw token from logos (payload-free; the slice is read back by the cooker).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[token("true")]
    True,
    #[token("false")]
    False,

    // Numbers outrank symbols so `-5` is an integer, not a symbol.
    #[regex(r"-?[0-9]+", priority = 3)]
    Int,
    #[regex(r"-?[0-9]*\.[0-9]+", priority = 3)]
    Float,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[regex(r#""([^"\\]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[A-Za-z\-+?!%*/<>=_][A-Za-z0-9\-+?!%*/<>=_]*", priority = 1)]
    Symbol,
}
