//! Call-shaped bound nodes.
//!
//! Every node here is fully resolved: the callee signature is final, the
//! argument list is in source order, and `args_to_params` (when present)
//! is the binder's permutation for named/optional arguments. Nodes are
//! immutable once built.

use tern_types::{CallableSig, ParamSig, TypeId};

use crate::{ExprId, TempRefEscapeFlags};

/// The instance an accessor or method is invoked on.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct BoundReceiver {
    /// Static type of the receiver expression.
    pub ty: TypeId,
    /// The receiver expression itself.
    pub expr: ExprId,
}

/// An ordinary (static or instance) method call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundCall {
    /// Static result type at this call site.
    pub ty: TypeId,
    /// The resolved callee.
    pub callee: CallableSig,
    /// Present only for instance calls.
    pub receiver: Option<BoundReceiver>,
    /// Supplied arguments, in source order.
    pub arguments: Vec<ExprId>,
    /// Argument-to-parameter permutation; `None` means identity.
    pub args_to_params: Option<Vec<u32>>,
    /// Whether trailing arguments are collected into a variadic parameter.
    pub expanded: bool,
    /// Whether the result is consumed by the surrounding expression.
    pub used: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}

/// A constructor call.
///
/// Constructors never return by reference and have no receiver channel;
/// the object under construction is not addressable by the caller until
/// the call completes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundNew {
    /// The constructed type.
    pub ty: TypeId,
    /// The resolved constructor's declared parameters.
    pub ctor_params: Vec<ParamSig>,
    /// Supplied arguments, in source order.
    pub arguments: Vec<ExprId>,
    /// Argument-to-parameter permutation; `None` means identity.
    pub args_to_params: Option<Vec<u32>>,
    /// Whether trailing arguments are collected into a variadic parameter.
    pub expanded: bool,
    /// Whether the result is consumed by the surrounding expression.
    pub used: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}

/// An indirect call through a function pointer.
///
/// Function pointers have no receiver, no named arguments, and no
/// variadic expansion; only the signature's shape matters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundFnPtrInvocation {
    /// Static result type at this call site.
    pub ty: TypeId,
    /// The pointer expression being invoked.
    pub pointer: ExprId,
    /// The pointed-to signature.
    pub signature: CallableSig,
    /// Supplied arguments, in source order.
    pub arguments: Vec<ExprId>,
    /// Whether the result is consumed by the surrounding expression.
    pub used: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}

/// An indexer access compiled as an accessor call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundIndexerAccess {
    /// Static result type at this access site.
    pub ty: TypeId,
    /// The indexed instance.
    pub receiver: BoundReceiver,
    /// The resolved accessor.
    pub accessor: CallableSig,
    /// Supplied index arguments, in source order.
    pub arguments: Vec<ExprId>,
    /// Argument-to-parameter permutation; `None` means identity.
    pub args_to_params: Option<Vec<u32>>,
    /// Whether trailing arguments are collected into a variadic parameter.
    pub expanded: bool,
    /// Whether the result is consumed by the surrounding expression.
    pub used: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}

/// A delegate invocation compiled as a call to the invoke method.
///
/// The delegate instance is the receiver; delegates are always heap
/// types, but their invoke signatures can still carry by-reference
/// parameters and returns.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoundDelegateInvocation {
    /// Static result type at this call site.
    pub ty: TypeId,
    /// The delegate instance being invoked.
    pub delegate: BoundReceiver,
    /// The delegate type's invoke signature.
    pub invoke: CallableSig,
    /// Supplied arguments, in source order.
    pub arguments: Vec<ExprId>,
    /// Argument-to-parameter permutation; `None` means identity.
    pub args_to_params: Option<Vec<u32>>,
    /// Whether trailing arguments are collected into a variadic parameter.
    pub expanded: bool,
    /// Whether the result is consumed by the surrounding expression.
    pub used: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}
