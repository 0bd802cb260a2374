//! Type-system metadata for the Tern compiler back end.
//!
//! Everything here is finalized, read-only data produced by earlier passes
//! (type checking, overload resolution, the scope/lifetime checker). The
//! back end only queries it:
//!
//! - `TypeId` / `TypeFacts` / `TypeTable`: per-type properties the escape
//!   analysis needs (stack-only, readonly, allows-stack-only)
//! - `RefKind`: by-reference passing kinds for parameters and returns
//! - `ScopedKind`: declared lifetime restrictions on parameters/receivers
//! - `ParamSig` / `CallableSig`: the resolved callee surface of a call

/// Assert a type's size at compile time.
///
/// Layout regressions in these types multiply across every bound node.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod facts;
mod ref_kind;
mod scoped;
mod signature;

pub use facts::{TypeFacts, TypeId, TypeTable};
pub use ref_kind::RefKind;
pub use scoped::ScopedKind;
pub use signature::{CallableSig, ParamSig};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ParamSig, RefKind, ScopedKind, TypeId};
    static_assert_size!(TypeId, 4);
    static_assert_size!(RefKind, 1);
    static_assert_size!(ScopedKind, 1);
    // TypeId (4) + RefKind (1) + ScopedKind (1) + padding
    static_assert_size!(ParamSig, 8);
}
