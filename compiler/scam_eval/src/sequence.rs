//! One interface over text and lists.
//!
//! Sequence builtins (`len`, `head`, `slice`, `concat`, ...) are written once
//! against [`Sequence`]. Text is indexed by character, and a single element
//! taken from text is a one-character text value.

use std::fmt;

use crate::value::Value;

/// The two sequence families. `concat` never mixes them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequenceFamily {
    Text,
    List,
}

impl fmt::Display for SequenceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SequenceFamily::Text => "str",
            SequenceFamily::List => "list",
        })
    }
}

/// Read-only sequence operations shared by text and lists.
///
/// Index arguments are in elements, not bytes. Callers validate bounds
/// first; `slice` clamps anything past the end.
pub trait Sequence {
    fn family(&self) -> SequenceFamily;

    /// Number of elements (characters, for text).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` past the end.
    fn nth(&self, index: usize) -> Option<Value>;

    /// Elements `lo..hi` as a new value of the same family.
    fn slice(&self, lo: usize, hi: usize) -> Value;

    /// This sequence followed by each of `rest`.
    ///
    /// Returns `None` if any of `rest` is not of this sequence's family.
    fn concat(&self, rest: &[Value]) -> Option<Value>;

    fn first(&self) -> Option<Value> {
        self.nth(0)
    }

    fn last(&self) -> Option<Value> {
        self.len().checked_sub(1).and_then(|i| self.nth(i))
    }
}

impl Sequence for String {
    fn family(&self) -> SequenceFamily {
        SequenceFamily::Text
    }

    // ASCII text is indexed by byte; anything else walks the characters.
    fn len(&self) -> usize {
        if self.is_ascii() {
            self.as_str().len()
        } else {
            self.chars().count()
        }
    }

    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    fn nth(&self, index: usize) -> Option<Value> {
        if self.is_ascii() {
            return self.get(index..=index).map(Value::string);
        }
        self.chars().nth(index).map(Value::string)
    }

    fn slice(&self, lo: usize, hi: usize) -> Value {
        if self.is_ascii() {
            let hi = hi.min(self.as_str().len());
            return Value::string(self.get(lo..hi).unwrap_or_default());
        }
        let taken: String = self.chars().skip(lo).take(hi.saturating_sub(lo)).collect();
        Value::string(taken)
    }

    fn concat(&self, rest: &[Value]) -> Option<Value> {
        let mut out = self.clone();
        for value in rest {
            out.push_str(value.as_str()?);
        }
        Some(Value::string(out))
    }

    fn last(&self) -> Option<Value> {
        self.chars().next_back().map(Value::string)
    }
}

impl Sequence for Vec<Value> {
    fn family(&self) -> SequenceFamily {
        SequenceFamily::List
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn nth(&self, index: usize) -> Option<Value> {
        self.get(index).cloned()
    }

    fn slice(&self, lo: usize, hi: usize) -> Value {
        let hi = hi.min(self.as_slice().len());
        let items = self.get(lo..hi).map(<[Value]>::to_vec).unwrap_or_default();
        Value::list(items)
    }

    fn concat(&self, rest: &[Value]) -> Option<Value> {
        let mut out = self.clone();
        for value in rest {
            out.extend_from_slice(value.as_list()?);
        }
        Some(Value::list(out))
    }
}
