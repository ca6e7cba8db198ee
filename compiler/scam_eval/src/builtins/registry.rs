//! Name lookup for builtins.
//!
//! The string-keyed map is consulted once per call node. After lookup the
//! interpreter holds a [`BuiltinOp`] and never touches strings again.

use rustc_hash::FxHashMap;

use super::BuiltinOp;

/// Registry mapping operator names to builtins.
///
/// Immutable after construction, so one registry can serve many threads.
pub struct BuiltinRegistry {
    by_name: FxHashMap<&'static str, BuiltinOp>,
}

impl BuiltinRegistry {
    /// Create a registry with every builtin registered.
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(BuiltinOp::ALL.len());
        for &op in BuiltinOp::ALL {
            by_name.insert(op.name(), op);
        }
        BuiltinRegistry { by_name }
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<BuiltinOp> {
        self.by_name.get(name).copied()
    }

    /// All registered operator names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
