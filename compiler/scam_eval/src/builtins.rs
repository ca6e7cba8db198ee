//! The builtin library.
//!
//! Operator names resolve once, through [`BuiltinRegistry`], to a
//! [`BuiltinOp`]. Everything after lookup is an exhaustive `match` on the
//! enum: [`BuiltinOp::contract`] for the dispatcher's checks and
//! [`BuiltinOp::apply`] for the computation.
//!
//! `apply` assumes the contract has been checked. The argument accessors
//! below still fail with a type error rather than panic if it was not.

mod arith;
mod compare;
mod contract;
mod logic;
mod math;
mod registry;
mod sequence_ops;
mod text_ops;

use std::fmt;

pub use contract::{comparable, Arity, Contract, Families, Params, Rule};
pub use registry::BuiltinRegistry;

use crate::errors::{argument_type, arity_mismatch, EvalError, EvalResult};
use crate::numeric::Number;
use crate::sequence::Sequence;
use crate::value::Value;

/// Every builtin operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,

    // Comparison and logic
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
    Not,
    Assert,
    Begin,

    // Sequences
    IsEmpty,
    Len,
    Head,
    Tail,
    Last,
    Init,
    Concat,
    Get,
    Slice,
    Take,
    Drop,

    // Lists
    Prepend,
    Append,
    Insert,
    Find,
    Rfind,
    List,
    Range,
    Sort,

    // Text
    Upper,
    Lower,
    IsUpper,
    IsLower,
    Trim,
    Split,
    Str,
    Repr,

    // Math
    Ceil,
    Floor,
    Abs,
    Divmod,
    Sqrt,
    Pow,
    Ln,
    Log,
}

const ANY1: &[Families] = &[Families::ANY];
const SEQ1: &[Families] = &[Families::SEQUENCE];
const TEXT1: &[Families] = &[Families::TEXT];
const BOOL1: &[Families] = &[Families::BOOL];
const NUM1: &[Families] = &[Families::NUMERIC];
const NUM2: &[Families] = &[Families::NUMERIC, Families::NUMERIC];
const INT2: &[Families] = &[Families::INT, Families::INT];
const LIST1: &[Families] = &[Families::LIST];
const SEQ_INT: &[Families] = &[Families::SEQUENCE, Families::INT];
const SEQ_INT_INT: &[Families] = &[Families::SEQUENCE, Families::INT, Families::INT];
const ANY_LIST: &[Families] = &[Families::ANY, Families::LIST];
const LIST_ANY: &[Families] = &[Families::LIST, Families::ANY];
const LIST_INT_ANY: &[Families] = &[Families::LIST, Families::INT, Families::ANY];

impl BuiltinOp {
    /// All operators, in registration order.
    pub const ALL: &'static [BuiltinOp] = &[
        BuiltinOp::Add,
        BuiltinOp::Sub,
        BuiltinOp::Mul,
        BuiltinOp::Div,
        BuiltinOp::FloorDiv,
        BuiltinOp::Rem,
        BuiltinOp::Eq,
        BuiltinOp::Lt,
        BuiltinOp::Gt,
        BuiltinOp::Le,
        BuiltinOp::Ge,
        BuiltinOp::Not,
        BuiltinOp::Assert,
        BuiltinOp::Begin,
        BuiltinOp::IsEmpty,
        BuiltinOp::Len,
        BuiltinOp::Head,
        BuiltinOp::Tail,
        BuiltinOp::Last,
        BuiltinOp::Init,
        BuiltinOp::Concat,
        BuiltinOp::Get,
        BuiltinOp::Slice,
        BuiltinOp::Take,
        BuiltinOp::Drop,
        BuiltinOp::Prepend,
        BuiltinOp::Append,
        BuiltinOp::Insert,
        BuiltinOp::Find,
        BuiltinOp::Rfind,
        BuiltinOp::List,
        BuiltinOp::Range,
        BuiltinOp::Sort,
        BuiltinOp::Upper,
        BuiltinOp::Lower,
        BuiltinOp::IsUpper,
        BuiltinOp::IsLower,
        BuiltinOp::Trim,
        BuiltinOp::Split,
        BuiltinOp::Str,
        BuiltinOp::Repr,
        BuiltinOp::Ceil,
        BuiltinOp::Floor,
        BuiltinOp::Abs,
        BuiltinOp::Divmod,
        BuiltinOp::Sqrt,
        BuiltinOp::Pow,
        BuiltinOp::Ln,
        BuiltinOp::Log,
    ];

    /// The operator's name in source code.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinOp::Add => "+",
            BuiltinOp::Sub => "-",
            BuiltinOp::Mul => "*",
            BuiltinOp::Div => "/",
            BuiltinOp::FloorDiv => "//",
            BuiltinOp::Rem => "%",
            BuiltinOp::Eq => "=",
            BuiltinOp::Lt => "<",
            BuiltinOp::Gt => ">",
            BuiltinOp::Le => "<=",
            BuiltinOp::Ge => ">=",
            BuiltinOp::Not => "not",
            BuiltinOp::Assert => "assert",
            BuiltinOp::Begin => "begin",
            BuiltinOp::IsEmpty => "empty?",
            BuiltinOp::Len => "len",
            BuiltinOp::Head => "head",
            BuiltinOp::Tail => "tail",
            BuiltinOp::Last => "last",
            BuiltinOp::Init => "init",
            BuiltinOp::Concat => "concat",
            BuiltinOp::Get => "get",
            BuiltinOp::Slice => "slice",
            BuiltinOp::Take => "take",
            BuiltinOp::Drop => "drop",
            BuiltinOp::Prepend => "prepend",
            BuiltinOp::Append => "append",
            BuiltinOp::Insert => "insert",
            BuiltinOp::Find => "find",
            BuiltinOp::Rfind => "rfind",
            BuiltinOp::List => "list",
            BuiltinOp::Range => "range",
            BuiltinOp::Sort => "sort",
            BuiltinOp::Upper => "upper",
            BuiltinOp::Lower => "lower",
            BuiltinOp::IsUpper => "isupper",
            BuiltinOp::IsLower => "islower",
            BuiltinOp::Trim => "trim",
            BuiltinOp::Split => "split",
            BuiltinOp::Str => "str",
            BuiltinOp::Repr => "repr",
            BuiltinOp::Ceil => "ceil",
            BuiltinOp::Floor => "floor",
            BuiltinOp::Abs => "abs",
            BuiltinOp::Divmod => "divmod",
            BuiltinOp::Sqrt => "sqrt",
            BuiltinOp::Pow => "pow",
            BuiltinOp::Ln => "ln",
            BuiltinOp::Log => "log",
        }
    }

    /// Arity, argument families and cross-argument rule.
    pub fn contract(self) -> Contract {
        use Arity::{AtLeast, Exact};
        use Params::{All, Each};

        match self {
            BuiltinOp::Add | BuiltinOp::Mul | BuiltinOp::Div => {
                Contract::new(AtLeast(2), All(Families::NUMERIC))
            }
            BuiltinOp::Sub => Contract::new(AtLeast(1), All(Families::NUMERIC)),
            BuiltinOp::FloorDiv | BuiltinOp::Rem => Contract::new(AtLeast(2), All(Families::INT)),
            BuiltinOp::Eq => Contract::new(Exact(2), All(Families::ANY)),
            BuiltinOp::Lt | BuiltinOp::Gt | BuiltinOp::Le | BuiltinOp::Ge => {
                Contract::new(Exact(2), All(Families::NUMERIC | Families::TEXT))
                    .with_rule(Rule::Comparable)
            }
            BuiltinOp::Not | BuiltinOp::Assert => Contract::new(Exact(1), Each(BOOL1)),
            BuiltinOp::Begin => Contract::new(AtLeast(1), All(Families::ANY)),
            BuiltinOp::IsEmpty
            | BuiltinOp::Len
            | BuiltinOp::Head
            | BuiltinOp::Tail
            | BuiltinOp::Last
            | BuiltinOp::Init => Contract::new(Exact(1), Each(SEQ1)),
            BuiltinOp::Concat => Contract::new(AtLeast(2), All(Families::SEQUENCE))
                .with_rule(Rule::SameSequence),
            BuiltinOp::Get | BuiltinOp::Take | BuiltinOp::Drop => {
                Contract::new(Exact(2), Each(SEQ_INT))
            }
            BuiltinOp::Slice => Contract::new(Exact(3), Each(SEQ_INT_INT)),
            BuiltinOp::Prepend => Contract::new(Exact(2), Each(ANY_LIST)),
            BuiltinOp::Append | BuiltinOp::Find | BuiltinOp::Rfind => {
                Contract::new(Exact(2), Each(LIST_ANY))
            }
            BuiltinOp::Insert => Contract::new(Exact(3), Each(LIST_INT_ANY)),
            BuiltinOp::List => Contract::new(AtLeast(0), All(Families::ANY)),
            BuiltinOp::Range | BuiltinOp::Divmod => Contract::new(Exact(2), Each(INT2)),
            BuiltinOp::Sort => Contract::new(Exact(1), Each(LIST1)),
            BuiltinOp::Upper
            | BuiltinOp::Lower
            | BuiltinOp::IsUpper
            | BuiltinOp::IsLower
            | BuiltinOp::Trim
            | BuiltinOp::Split => Contract::new(Exact(1), Each(TEXT1)),
            BuiltinOp::Str | BuiltinOp::Repr => Contract::new(Exact(1), Each(ANY1)),
            BuiltinOp::Ceil
            | BuiltinOp::Floor
            | BuiltinOp::Abs
            | BuiltinOp::Sqrt
            | BuiltinOp::Ln => Contract::new(Exact(1), Each(NUM1)),
            BuiltinOp::Pow | BuiltinOp::Log => Contract::new(Exact(2), Each(NUM2)),
        }
    }

    /// Compute the result from already checked arguments.
    pub fn apply(self, args: &[Value]) -> EvalResult {
        let name = self.name();
        match self {
            BuiltinOp::Add => arith::add(args),
            BuiltinOp::Sub => arith::sub(args),
            BuiltinOp::Mul => arith::mul(args),
            BuiltinOp::Div => arith::div(args),
            BuiltinOp::FloorDiv => arith::floor_div(args),
            BuiltinOp::Rem => arith::rem(args),
            BuiltinOp::Eq => compare::equal(args),
            BuiltinOp::Lt => compare::ordered(name, args, std::cmp::Ordering::is_lt),
            BuiltinOp::Gt => compare::ordered(name, args, std::cmp::Ordering::is_gt),
            BuiltinOp::Le => compare::ordered(name, args, std::cmp::Ordering::is_le),
            BuiltinOp::Ge => compare::ordered(name, args, std::cmp::Ordering::is_ge),
            BuiltinOp::Not => logic::not(args),
            BuiltinOp::Assert => logic::assert(args),
            BuiltinOp::Begin => logic::begin(args),
            BuiltinOp::IsEmpty => sequence_ops::is_empty(args),
            BuiltinOp::Len => sequence_ops::len(args),
            BuiltinOp::Head => sequence_ops::head(args),
            BuiltinOp::Tail => sequence_ops::tail(args),
            BuiltinOp::Last => sequence_ops::last(args),
            BuiltinOp::Init => sequence_ops::init(args),
            BuiltinOp::Concat => sequence_ops::concat(args),
            BuiltinOp::Get => sequence_ops::get(args),
            BuiltinOp::Slice => sequence_ops::slice(args),
            BuiltinOp::Take => sequence_ops::take(args),
            BuiltinOp::Drop => sequence_ops::drop(args),
            BuiltinOp::Prepend => sequence_ops::prepend(args),
            BuiltinOp::Append => sequence_ops::append(args),
            BuiltinOp::Insert => sequence_ops::insert(args),
            BuiltinOp::Find => sequence_ops::find(args, false),
            BuiltinOp::Rfind => sequence_ops::find(args, true),
            BuiltinOp::List => Ok(Value::list(args.to_vec())),
            BuiltinOp::Range => sequence_ops::range(args),
            BuiltinOp::Sort => sequence_ops::sort(args),
            BuiltinOp::Upper => text_ops::map_text(name, args, str::to_uppercase),
            BuiltinOp::Lower => text_ops::map_text(name, args, str::to_lowercase),
            BuiltinOp::IsUpper => text_ops::is_case(name, args, char::is_uppercase),
            BuiltinOp::IsLower => text_ops::is_case(name, args, char::is_lowercase),
            BuiltinOp::Trim => text_ops::map_text(name, args, |s| s.trim().to_string()),
            BuiltinOp::Split => text_ops::split(args),
            BuiltinOp::Str => text_ops::str(args),
            BuiltinOp::Repr => text_ops::repr(args),
            BuiltinOp::Ceil => math::round(name, args, f64::ceil),
            BuiltinOp::Floor => math::round(name, args, f64::floor),
            BuiltinOp::Abs => math::abs(args),
            BuiltinOp::Divmod => math::divmod(args),
            BuiltinOp::Sqrt => math::sqrt(args),
            BuiltinOp::Pow => math::pow(args),
            BuiltinOp::Ln => math::ln(args),
            BuiltinOp::Log => math::log(args),
        }
    }
}

impl fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Argument accessors

fn arg<'a>(name: &str, args: &'a [Value], position: usize) -> Result<&'a Value, EvalError> {
    args.get(position)
        .ok_or_else(|| arity_mismatch(name, position + 1, args.len()))
}

fn int_at(name: &str, args: &[Value], position: usize) -> Result<i64, EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_int()
        .ok_or_else(|| argument_type(name, position, Families::INT.describe(), value))
}

fn bool_at(name: &str, args: &[Value], position: usize) -> Result<bool, EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_bool()
        .ok_or_else(|| argument_type(name, position, Families::BOOL.describe(), value))
}

fn number_at(name: &str, args: &[Value], position: usize) -> Result<Number, EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_number()
        .ok_or_else(|| argument_type(name, position, Families::NUMERIC.describe(), value))
}

fn text_at<'a>(name: &str, args: &'a [Value], position: usize) -> Result<&'a str, EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_str()
        .ok_or_else(|| argument_type(name, position, Families::TEXT.describe(), value))
}

fn list_at<'a>(name: &str, args: &'a [Value], position: usize) -> Result<&'a [Value], EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_list()
        .ok_or_else(|| argument_type(name, position, Families::LIST.describe(), value))
}

fn sequence_at<'a>(
    name: &str,
    args: &'a [Value],
    position: usize,
) -> Result<&'a dyn Sequence, EvalError> {
    let value = arg(name, args, position)?;
    value
        .as_sequence()
        .ok_or_else(|| argument_type(name, position, Families::SEQUENCE.describe(), value))
}

/// All arguments as numbers.
fn numbers(name: &str, args: &[Value]) -> Result<Vec<Number>, EvalError> {
    (0..args.len())
        .map(|position| number_at(name, args, position))
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
