//! Expression tree produced by the parser and consumed by the evaluator.
//!
//! The tree is deliberately small: literals, bracketed list literals, bare
//! symbols, and calls. Every node carries the span of the source text it was
//! parsed from so runtime errors can point back at the offending call.

use std::fmt;

use crate::Span;

/// A parsed expression with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The shape of an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal: `42`, `-72`.
    Int(i64),
    /// Real literal: `3.2`, `-28.8`.
    Float(f64),
    /// `true` / `false`.
    Bool(bool),
    /// Double-quoted text literal, escapes already cooked.
    Str(String),
    /// A bare symbol such as `len` or `+`.
    Symbol(String),
    /// Bracketed list literal: `[1 (+ 1 1) "x"]`.
    ///
    /// Elements are expressions and are evaluated left to right.
    List(Vec<Expr>),
    /// Parenthesized call: `(head arg...)`.
    ///
    /// The parser accepts any expression in head position; the evaluator
    /// requires it to be a symbol naming a builtin.
    Call { head: Box<Expr>, args: Vec<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    // Factory helpers for hand-built trees (tests, embedders).

    pub fn int(n: i64) -> Self {
        Expr::new(ExprKind::Int(n), Span::DUMMY)
    }

    pub fn float(n: f64) -> Self {
        Expr::new(ExprKind::Float(n), Span::DUMMY)
    }

    pub fn bool(b: bool) -> Self {
        Expr::new(ExprKind::Bool(b), Span::DUMMY)
    }

    pub fn str(s: impl Into<String>) -> Self {
        Expr::new(ExprKind::Str(s.into()), Span::DUMMY)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::new(ExprKind::Symbol(name.into()), Span::DUMMY)
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::new(ExprKind::List(items), Span::DUMMY)
    }

    /// Call of the operator named `op` with `args`.
    pub fn call(op: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::new(
            ExprKind::Call {
                head: Box::new(Expr::symbol(op)),
                args,
            },
            Span::DUMMY,
        )
    }

    /// The symbol name, if this expression is a bare symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

/// Renders the expression back to source syntax.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Float(n) => write!(f, "{n:?}"),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Str(s) => write!(f, "{s:?}"),
            ExprKind::Symbol(name) => write!(f, "{name}"),
            ExprKind::List(items) => {
                write!(f, "[")?;
                write_spaced(f, items)?;
                write!(f, "]")
            }
            ExprKind::Call { head, args } => {
                write!(f, "({head}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

fn write_spaced(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
