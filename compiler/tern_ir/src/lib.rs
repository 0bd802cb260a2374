//! Bound-tree call nodes for the Tern compiler back end.
//!
//! The binder has already type-checked the program, resolved overloads,
//! and mapped arguments to parameters; what reaches this crate is the
//! validated call-shaped nodes the code generator walks:
//!
//! - the five call-shaped node kinds (`BoundCall`, `BoundNew`,
//!   `BoundFnPtrInvocation`, `BoundIndexerAccess`,
//!   `BoundDelegateInvocation`)
//! - `TempRefEscapeFlags`: per-call-site escape facts proven upstream
//! - `corresponding_parameter`: the binder's argument-to-parameter
//!   correspondence, so downstream passes never re-derive binding rules

mod bound;
mod calls;
mod escape_flags;
mod expr_id;

pub use bound::{
    BoundCall, BoundDelegateInvocation, BoundFnPtrInvocation, BoundIndexerAccess, BoundNew,
    BoundReceiver,
};
pub use calls::corresponding_parameter;
pub use escape_flags::TempRefEscapeFlags;
pub use expr_id::ExprId;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{BoundReceiver, ExprId, TempRefEscapeFlags};
    tern_types::static_assert_size!(ExprId, 4);
    tern_types::static_assert_size!(TempRefEscapeFlags, 1);
    tern_types::static_assert_size!(BoundReceiver, 8);
}
