//! Resolved callable signatures as the back end sees them.
//!
//! Overload resolution has already picked the callee; only the facts the
//! code generator needs survive here. No names, no bodies, no defaults.

use crate::{RefKind, ScopedKind, TypeId};

/// A declared parameter of a resolved callable.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct ParamSig {
    /// Declared parameter type.
    pub ty: TypeId,
    /// How the argument is passed.
    pub ref_kind: RefKind,
    /// Declared scope restriction, `None` when unannotated.
    pub scope: ScopedKind,
}

impl ParamSig {
    /// A plain by-value parameter.
    #[inline]
    pub const fn by_value(ty: TypeId) -> Self {
        Self {
            ty,
            ref_kind: RefKind::None,
            scope: ScopedKind::None,
        }
    }

    /// A by-reference parameter of the given kind.
    #[inline]
    pub const fn by_ref(ty: TypeId, ref_kind: RefKind) -> Self {
        Self {
            ty,
            ref_kind,
            scope: ScopedKind::None,
        }
    }

    /// Attach a scope annotation.
    #[inline]
    #[must_use]
    pub const fn scoped(mut self, scope: ScopedKind) -> Self {
        self.scope = scope;
        self
    }
}

/// Signature facts about a resolved callee.
///
/// Shared by ordinary methods, constructors, indexer accessors, delegate
/// invoke methods, and function-pointer signatures; the adapter for each
/// bound-node kind decides which fields are meaningful.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallableSig {
    /// Static return type.
    pub return_type: TypeId,
    /// By-reference kind of the return, `None` for plain value returns.
    pub return_ref_kind: RefKind,
    /// Whether the declared accessor is read-only (cannot mutate the
    /// receiver), independent of how the receiver is addressed.
    pub is_readonly: bool,
    /// Scope annotation on the implicit receiver parameter.
    pub receiver_scope: ScopedKind,
    /// Declared parameters, in declaration order.
    pub params: Vec<ParamSig>,
}

impl CallableSig {
    /// A signature returning `return_type` by value with the given
    /// parameters. Receiver facts default to unannotated/mutable.
    pub fn returning(return_type: TypeId, params: Vec<ParamSig>) -> Self {
        Self {
            return_type,
            return_ref_kind: RefKind::None,
            is_readonly: false,
            receiver_scope: ScopedKind::None,
            params,
        }
    }

    /// Set the return's by-reference kind.
    #[must_use]
    pub fn with_return_ref(mut self, ref_kind: RefKind) -> Self {
        self.return_ref_kind = ref_kind;
        self
    }

    /// Mark the declared accessor read-only.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    /// Set the receiver's scope annotation.
    #[must_use]
    pub fn with_receiver_scope(mut self, scope: ScopedKind) -> Self {
        self.receiver_scope = scope;
        self
    }
}
