//! Tree-walking evaluator.
//!
//! # Call pipeline
//!
//! Every call node goes through the same five steps, and the first failure
//! ends the whole evaluation:
//!
//! 1. **Lookup**: the head symbol resolves to a [`BuiltinOp`].
//! 2. **Arity**: the syntactic argument count is checked before any argument
//!    is evaluated, so `(len (/ 1 0) [])` is an arity error.
//! 3. **Arguments**: evaluated left to right.
//! 4. **Types**: each value is checked against the builtin's [`Contract`].
//! 5. **Compute**: the builtin runs, applying its own domain checks.
//!
//! # Error locations
//!
//! Type errors point at the offending argument. Arity and domain errors
//! point at the whole call. Unknown operators point at the head.

use scam_ir::{Expr, ExprKind, Span};
use scam_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::builtins::{BuiltinOp, BuiltinRegistry, Contract};
use crate::errors::{not_callable, unbound_symbol, unknown_operator, EvalError, EvalResult};
use crate::value::Value;

/// Evaluated arguments of one call. Most calls have few arguments.
type ArgBuffer = SmallVec<[Value; 4]>;

/// The evaluator.
///
/// Holds only the immutable builtin registry, so one interpreter can be
/// shared across threads evaluating independent expressions.
pub struct Interpreter {
    registry: BuiltinRegistry,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            registry: BuiltinRegistry::new(),
        }
    }

    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    /// Evaluate one top-level expression.
    #[tracing::instrument(level = "debug", skip_all, fields(span = %expr.span))]
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        self.eval_expr(expr).inspect_err(|err| {
            debug!(
                code = %err.error_code(),
                category = %err.category(),
                "evaluation failed: {err}"
            );
        })
    }

    fn eval_expr(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::int(*n)),
            ExprKind::Float(n) => Ok(Value::float(*n)),
            ExprKind::Bool(b) => Ok(Value::bool(*b)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Symbol(name) => Err(unbound_symbol(name).with_span(expr.span)),
            ExprKind::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(values))
            }
            ExprKind::Call { head, args } => self.eval_call(head, args, expr.span),
        }
    }

    fn eval_call(&self, head: &Expr, args: &[Expr], span: Span) -> EvalResult {
        let op = self.resolve(head)?;
        let name = op.name();
        let contract: Contract = op.contract();

        contract
            .arity
            .check(name, args.len())
            .map_err(|err| err.with_span(span))?;

        let mut values = ArgBuffer::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        contract
            .check_types(name, &values)
            .map_err(|err| locate(err, args, span))?;

        trace!(op = name, argc = values.len(), "apply");
        op.apply(&values).map_err(|err| locate(err, args, span))
    }

    /// Map a call head to a builtin.
    fn resolve(&self, head: &Expr) -> Result<BuiltinOp, EvalError> {
        match head.as_symbol() {
            Some(name) => self
                .registry
                .lookup(name)
                .ok_or_else(|| unknown_operator(name).with_span(head.span)),
            None => {
                let value = self.eval_expr(head)?;
                Err(not_callable(value.type_name()).with_span(head.span))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Point an error at the argument it blames, or else at the call.
fn locate(err: EvalError, args: &[Expr], call_span: Span) -> EvalError {
    let arg_span = err
        .argument_position()
        .and_then(|position| args.get(position))
        .map(|arg| arg.span);
    match arg_span {
        Some(span) => err.or_span(span),
        None => err.or_span(call_span),
    }
}
