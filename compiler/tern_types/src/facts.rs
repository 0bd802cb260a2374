//! Pre-computed per-type facts for the back end.
//!
//! `TypeFacts` are finalized when a type is declared and never recomputed,
//! so every escape-analysis query is an O(1) bit test. The `TypeTable` is
//! the read-only registry the code generator threads through its passes.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

/// Interned type handle.
///
/// An opaque index into compiler-wide type metadata; the back end never
/// inspects type structure, only the facts registered for the handle.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

bitflags! {
    /// Escape-relevant properties of a type.
    ///
    /// Computed by the front end when the type is finalized; the back end
    /// only reads them.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFacts: u8 {
        /// Stack-only aggregate: never heap-allocated or boxed, instances
        /// may not outlive the frame that created them.
        const STACK_ONLY = 1 << 0;

        /// Declared immutable: no member can mutate the instance.
        const READONLY = 1 << 1;

        /// Type parameter permitted to be instantiated with a stack-only
        /// aggregate. Must be treated as stack-only until substituted.
        const ALLOWS_STACK_ONLY = 1 << 2;
    }
}

/// Registry of per-type facts.
///
/// Populated by earlier passes, immutable by the time code generation
/// runs. Handles that were never declared report no facts, which is the
/// conservative-safe direction for plain (heap or scalar) types.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    facts: FxHashMap<TypeId, TypeFacts>,
    next_id: u32,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type with the given facts, returning its handle.
    pub fn declare(&mut self, facts: TypeFacts) -> TypeId {
        let id = TypeId::from_raw(self.next_id);
        self.next_id += 1;
        if !facts.is_empty() {
            self.facts.insert(id, facts);
        }
        id
    }

    /// Look up the facts for a handle.
    #[inline]
    pub fn facts(&self, id: TypeId) -> TypeFacts {
        self.facts.get(&id).copied().unwrap_or(TypeFacts::empty())
    }

    /// Whether the type is a stack-only aggregate.
    #[inline]
    pub fn is_stack_only(&self, id: TypeId) -> bool {
        self.facts(id).contains(TypeFacts::STACK_ONLY)
    }

    /// Whether the type is declared immutable.
    #[inline]
    pub fn is_readonly(&self, id: TypeId) -> bool {
        self.facts(id).contains(TypeFacts::READONLY)
    }

    /// Whether the type is a stack-only aggregate, or a type parameter
    /// that may be instantiated with one.
    ///
    /// This is the query the escape analysis asks of every return,
    /// receiver, and parameter type.
    #[inline]
    pub fn may_be_stack_only(&self, id: TypeId) -> bool {
        self.facts(id)
            .intersects(TypeFacts::STACK_ONLY | TypeFacts::ALLOWS_STACK_ONLY)
    }
}
