//! Emission strategy for call-shaped nodes.

use tern_types::TypeTable;

use crate::ref_safety::{might_escape, CallShape};

/// How the emitter materializes a call's receiver and arguments.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum CallEmitStrategy {
    /// Evaluate the receiver and arguments directly onto the evaluation
    /// stack; no extra storage.
    Direct,

    /// Pin every counted receiver/argument temporary in addressable
    /// storage for the call's full syntactic duration.
    Defensive,
}

impl CallEmitStrategy {
    /// Whether the defensive path was chosen.
    #[inline]
    pub const fn is_defensive(self) -> bool {
        matches!(self, Self::Defensive)
    }
}

/// Pick the emission strategy for one call site.
pub fn call_emit_strategy(types: &TypeTable, shape: &CallShape<'_>) -> CallEmitStrategy {
    if might_escape(types, shape) {
        CallEmitStrategy::Defensive
    } else {
        CallEmitStrategy::Direct
    }
}
