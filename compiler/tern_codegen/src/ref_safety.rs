//! Reference-escape safety for call emission.
//!
//! Decides, per call-shaped bound node, whether evaluating the call could
//! let the address of a compiler-synthesized temporary escape the call's
//! syntactic lifetime. The verdict picks the emission path: `true` routes
//! the call through pinned addressable temporaries, `false` lets the
//! receiver and arguments evaluate in place.
//!
//! # The rule
//!
//! A "channel" is any expression position through which an address could
//! flow into or out of the call. An escape needs one channel capable of
//! *producing* a captured reference (writable: a used by-reference
//! return, a writable reference parameter, a writably addressed
//! receiver) and one capable of *supplying* the address that gets
//! captured (readable: any receiver or parameter an address flows
//! through). The verdict is `true` exactly when both kinds are present.
//!
//! The scope/lifetime checker has already rejected statically provable
//! violations; this pass only decides how a provably-legal call gets
//! emitted, never whether it is legal. It reports no diagnostics.

use tern_ir::{
    corresponding_parameter, BoundCall, BoundDelegateInvocation, BoundFnPtrInvocation,
    BoundIndexerAccess, BoundNew, ExprId, TempRefEscapeFlags,
};
use tern_types::{ParamSig, RefKind, ScopedKind, TypeId, TypeTable};

use crate::AddressKind;

/// Everything the escape analysis needs to know about one call site.
///
/// Transient: built by an adapter from a bound node immediately before
/// that node is emitted, consulted once, discarded.
#[derive(Clone, Copy, Debug)]
pub struct CallShape<'n> {
    /// Static result type of the call.
    pub return_type: TypeId,
    /// By-reference kind of the return.
    pub return_ref_kind: RefKind,
    /// Whether the surrounding expression consumes the result.
    pub used: bool,
    /// Receiver type, for instance calls only.
    pub receiver_type: Option<TypeId>,
    /// How the receiver is addressed at this site; `Some` only when
    /// `receiver_type` is `Some`.
    pub receiver_address: Option<AddressKind>,
    /// Whether the declared accessor is read-only.
    pub is_receiver_readonly: bool,
    /// Scope annotation on the implicit receiver parameter.
    pub receiver_scope: ScopedKind,
    /// The callee's declared parameters.
    pub parameters: &'n [ParamSig],
    /// Supplied arguments, in source order.
    pub arguments: &'n [ExprId],
    /// Argument-to-parameter permutation; `None` means identity.
    pub args_to_params: Option<&'n [u32]>,
    /// Whether trailing arguments fill a variadic collector.
    pub expanded: bool,
    /// Escape facts proven upstream for this call site.
    pub escape_flags: TempRefEscapeFlags,
}

impl<'n> CallShape<'n> {
    /// Project an ordinary call.
    ///
    /// `receiver_address` is how the emitter is addressing the receiver,
    /// known only at the emission site.
    pub fn of_call(node: &'n BoundCall, receiver_address: Option<AddressKind>) -> Self {
        Self {
            return_type: node.ty,
            return_ref_kind: node.callee.return_ref_kind,
            used: node.used,
            receiver_type: node.receiver.map(|r| r.ty),
            receiver_address,
            is_receiver_readonly: node.callee.is_readonly,
            receiver_scope: node.callee.receiver_scope,
            parameters: &node.callee.params,
            arguments: &node.arguments,
            args_to_params: node.args_to_params.as_deref(),
            expanded: node.expanded,
            escape_flags: node.escape_flags,
        }
    }

    /// Project a constructor call.
    ///
    /// No receiver channel; the result is never returned by reference.
    pub fn of_new(node: &'n BoundNew) -> Self {
        Self {
            return_type: node.ty,
            return_ref_kind: RefKind::None,
            used: node.used,
            receiver_type: None,
            receiver_address: None,
            is_receiver_readonly: false,
            receiver_scope: ScopedKind::None,
            parameters: &node.ctor_params,
            arguments: &node.arguments,
            args_to_params: node.args_to_params.as_deref(),
            expanded: node.expanded,
            escape_flags: node.escape_flags,
        }
    }

    /// Project a function-pointer invocation.
    ///
    /// No receiver, no permutation, never expanded.
    pub fn of_fn_ptr_invocation(node: &'n BoundFnPtrInvocation) -> Self {
        Self {
            return_type: node.ty,
            return_ref_kind: node.signature.return_ref_kind,
            used: node.used,
            receiver_type: None,
            receiver_address: None,
            is_receiver_readonly: false,
            receiver_scope: ScopedKind::None,
            parameters: &node.signature.params,
            arguments: &node.arguments,
            args_to_params: None,
            expanded: false,
            escape_flags: node.escape_flags,
        }
    }

    /// Project an indexer access through its accessor signature.
    pub fn of_indexer(node: &'n BoundIndexerAccess, receiver_address: Option<AddressKind>) -> Self {
        Self {
            return_type: node.ty,
            return_ref_kind: node.accessor.return_ref_kind,
            used: node.used,
            receiver_type: Some(node.receiver.ty),
            receiver_address,
            is_receiver_readonly: node.accessor.is_readonly,
            receiver_scope: node.accessor.receiver_scope,
            parameters: &node.accessor.params,
            arguments: &node.arguments,
            args_to_params: node.args_to_params.as_deref(),
            expanded: node.expanded,
            escape_flags: node.escape_flags,
        }
    }

    /// Project a delegate invocation through its invoke signature.
    pub fn of_delegate_invocation(
        node: &'n BoundDelegateInvocation,
        receiver_address: Option<AddressKind>,
    ) -> Self {
        Self {
            return_type: node.ty,
            return_ref_kind: node.invoke.return_ref_kind,
            used: node.used,
            receiver_type: Some(node.delegate.ty),
            receiver_address,
            is_receiver_readonly: node.invoke.is_readonly,
            receiver_scope: node.invoke.receiver_scope,
            parameters: &node.invoke.params,
            arguments: &node.arguments,
            args_to_params: node.args_to_params.as_deref(),
            expanded: node.expanded,
            escape_flags: node.escape_flags,
        }
    }
}

/// Could evaluating this call let a temporary's address escape?
///
/// Total, deterministic, side-effect-free. `true` obligates the emitter
/// to keep an addressable temporary alive for every counted receiver and
/// argument position for the call's full syntactic duration.
pub fn might_escape(types: &TypeTable, shape: &CallShape<'_>) -> bool {
    debug_assert!(
        shape.receiver_address.is_none() || shape.receiver_type.is_some(),
        "receiver addressing mode supplied for a call with no receiver"
    );

    let verdict = escape_verdict(types, shape);
    tracing::trace!(
        verdict,
        used = shape.used,
        args = shape.arguments.len(),
        "temp ref escape verdict"
    );
    verdict
}

fn escape_verdict(types: &TypeTable, shape: &CallShape<'_>) -> bool {
    let flags = shape.escape_flags;
    let mut writable: u32 = 0;
    let mut readable: u32 = 0;

    // Return channel. A discarded by-reference return cannot carry an
    // address anywhere observable, so `used` gates the whole channel.
    if shape.used
        && (shape.return_ref_kind.is_reference() || types.may_be_stack_only(shape.return_type))
    {
        writable += 1;
    }

    // Receiver channel.
    if let Some(receiver_type) = shape.receiver_type {
        let writably_addressed = shape
            .receiver_address
            .is_some_and(AddressKind::is_writable);

        if writably_addressed && shape.receiver_scope.is_unscoped() {
            // A writable unscoped address is simultaneously a sink and a
            // source. The upstream proof suppresses only the source half.
            writable += 1;
            if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_FROM_RECEIVER) {
                readable += 1;
            }
        } else if types.may_be_stack_only(receiver_type)
            && !shape.receiver_scope.excludes_channel()
        {
            let readonly = shape.is_receiver_readonly
                || types.is_readonly(receiver_type)
                || !writably_addressed;
            if !readonly {
                writable += 1;
            }
            if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_FROM_RECEIVER) {
                readable += 1;
            }
        } else if shape.receiver_address.is_some() && shape.receiver_scope.is_unscoped() {
            // A plain address can still leak a pointer into the call but
            // cannot itself be escaped as an output.
            if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_FROM_RECEIVER) {
                readable += 1;
            }
        }
    }

    // Checking before the argument loop is an optimization only; the
    // counters never decrease, so ordering cannot change the verdict.
    if writable > 0 && readable > 0 {
        return true;
    }

    // Argument channels.
    for arg_index in 0..shape.arguments.len() {
        if let Some(param) = corresponding_parameter(
            arg_index,
            shape.parameters,
            shape.args_to_params,
            shape.expanded,
        ) {
            count_argument_channels(types, flags, param, &mut writable, &mut readable);
        }

        if writable > 0 && readable > 0 {
            return true;
        }
    }

    false
}

fn count_argument_channels(
    types: &TypeTable,
    flags: TempRefEscapeFlags,
    param: &ParamSig,
    writable: &mut u32,
    readable: &mut u32,
) {
    // A value-scoped channel provably exposes no reference to itself.
    if param.scope.excludes_channel() {
        return;
    }

    if param.ref_kind.is_writable_reference() && param.scope.is_unscoped() {
        // Sink for the call's side effects, and a source too: the
        // caller's storage is observable to the callee.
        if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_TO_ARGUMENTS) {
            *writable += 1;
        }
        *readable += 1;
    } else if types.may_be_stack_only(param.ty) {
        let readonly = types.is_readonly(param.ty)
            || (param.ref_kind.is_reference() && !param.ref_kind.is_writable_reference());
        if readonly {
            if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_FROM_ARGUMENTS) {
                *readable += 1;
            }
        } else {
            if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_TO_ARGUMENTS) {
                *writable += 1;
            }
            *readable += 1;
        }
    } else if param.ref_kind.is_reference() && param.scope.is_unscoped() {
        if !flags.contains(TempRefEscapeFlags::CANNOT_ESCAPE_FROM_ARGUMENTS) {
            *readable += 1;
        }
    }
}
