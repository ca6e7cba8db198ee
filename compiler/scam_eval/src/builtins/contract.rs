//! Arity and type contracts for builtins.
//!
//! Every builtin declares a [`Contract`]. The interpreter checks arity on the
//! syntactic argument count before evaluating anything, then checks the
//! evaluated arguments against the family masks before the builtin runs.

use bitflags::bitflags;

use crate::errors::{
    argument_type, arity_mismatch, incomparable, mixed_sequences, too_few_arguments, EvalError,
};
use crate::value::Value;

bitflags! {
    /// Set of value families accepted at one argument position.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Families: u8 {
        const INT = 1 << 0;
        const FLOAT = 1 << 1;
        const BOOL = 1 << 2;
        const TEXT = 1 << 3;
        const LIST = 1 << 4;

        const NUMERIC = Self::INT.bits() | Self::FLOAT.bits();
        const SEQUENCE = Self::TEXT.bits() | Self::LIST.bits();
        const ANY = Self::NUMERIC.bits() | Self::BOOL.bits() | Self::SEQUENCE.bits();
    }
}

impl Families {
    /// The single family `value` belongs to.
    pub fn of(value: &Value) -> Families {
        match value {
            Value::Int(_) => Families::INT,
            Value::Float(_) => Families::FLOAT,
            Value::Bool(_) => Families::BOOL,
            Value::Str(_) => Families::TEXT,
            Value::List(_) => Families::LIST,
        }
    }

    #[inline]
    pub fn admits(self, value: &Value) -> bool {
        self.contains(Families::of(value))
    }

    /// Human-readable name of the mask, for error messages.
    pub fn describe(self) -> &'static str {
        if self == Families::ANY {
            "any value"
        } else if self == Families::NUMERIC {
            "a number"
        } else if self == Families::SEQUENCE {
            "a str or list"
        } else if self == Families::NUMERIC | Families::TEXT {
            "a number or str"
        } else if self == Families::INT {
            "an int"
        } else if self == Families::FLOAT {
            "a float"
        } else if self == Families::BOOL {
            "a bool"
        } else if self == Families::TEXT {
            "a str"
        } else if self == Families::LIST {
            "a list"
        } else {
            "a different value"
        }
    }
}

/// Accepted argument counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn admits(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(min) => count >= min,
        }
    }

    pub fn check(self, name: &str, count: usize) -> Result<(), EvalError> {
        match self {
            _ if self.admits(count) => Ok(()),
            Arity::Exact(n) => Err(arity_mismatch(name, n, count)),
            Arity::AtLeast(min) => Err(too_few_arguments(name, min, count)),
        }
    }
}

/// Per-position family masks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Params {
    /// One mask per position.
    Each(&'static [Families]),
    /// The same mask for every argument of a variadic builtin.
    All(Families),
}

impl Params {
    /// Mask for the argument at `position`.
    pub fn at(self, position: usize) -> Families {
        match self {
            Params::Each(masks) => masks.get(position).copied().unwrap_or(Families::ANY),
            Params::All(mask) => mask,
        }
    }
}

/// Cross-argument constraints checked after the per-position masks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    None,
    /// Every argument is the same sequence family as the first.
    SameSequence,
    /// Both arguments are numbers, or both are text.
    Comparable,
}

/// Everything the dispatcher checks before a builtin runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub arity: Arity,
    pub params: Params,
    pub rule: Rule,
}

impl Contract {
    pub const fn new(arity: Arity, params: Params) -> Self {
        Contract {
            arity,
            params,
            rule: Rule::None,
        }
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Check evaluated arguments against the masks and rule.
    ///
    /// The first offending argument, from the left, is reported.
    pub fn check_types(&self, name: &str, args: &[Value]) -> Result<(), EvalError> {
        for (position, arg) in args.iter().enumerate() {
            let mask = self.params.at(position);
            if !mask.admits(arg) {
                return Err(argument_type(name, position, mask.describe(), arg));
            }
        }

        match self.rule {
            Rule::None => Ok(()),
            Rule::SameSequence => {
                let Some((first, rest)) = args.split_first() else {
                    return Ok(());
                };
                let family = Families::of(first);
                if rest.iter().all(|arg| Families::of(arg) == family) {
                    Ok(())
                } else {
                    Err(mixed_sequences(name))
                }
            }
            Rule::Comparable => match args {
                [left, right] if !comparable(left, right) => Err(incomparable(name, left, right)),
                _ => Ok(()),
            },
        }
    }
}

/// Whether `<` and friends are defined between two values.
pub fn comparable(left: &Value, right: &Value) -> bool {
    (left.is_numeric() && right.is_numeric())
        || (matches!(left, Value::Str(_)) && matches!(right, Value::Str(_)))
}
