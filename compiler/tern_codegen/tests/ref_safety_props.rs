//! Property-based tests for the escape analysis.
//!
//! These complement the unit scenarios in `ref_safety/tests.rs` by
//! generating random call shapes and verifying the analyzer's global
//! guarantees:
//! 1. Upstream proof flags only narrow the verdict, never widen it
//! 2. Discarding the result only narrows the verdict
//! 3. Value-scoped channels are inert under any ref/address toggles
//! 4. The argument-to-parameter permutation cannot change the verdict

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests can panic"
)]

use proptest::prelude::*;
use tern_codegen::{might_escape, AddressKind, CallShape};
use tern_ir::{ExprId, TempRefEscapeFlags};
use tern_types::{ParamSig, RefKind, ScopedKind, TypeFacts, TypeId, TypeTable};

/// A table holding one type per `TypeFacts` bit combination.
fn fact_table() -> (TypeTable, Vec<TypeId>) {
    let mut table = TypeTable::new();
    let ids = (0..8u8)
        .map(|bits| table.declare(TypeFacts::from_bits_truncate(bits)))
        .collect();
    (table, ids)
}

fn ref_kind_strategy() -> impl Strategy<Value = RefKind> {
    prop_oneof![
        Just(RefKind::None),
        Just(RefKind::Ref),
        Just(RefKind::In),
        Just(RefKind::Out),
        Just(RefKind::RefReadOnly),
    ]
}

fn scope_strategy() -> impl Strategy<Value = ScopedKind> {
    prop_oneof![
        Just(ScopedKind::None),
        Just(ScopedKind::ScopedRef),
        Just(ScopedKind::ScopedValue),
    ]
}

fn address_strategy() -> impl Strategy<Value = Option<AddressKind>> {
    prop_oneof![
        Just(None),
        Just(Some(AddressKind::ReadOnly)),
        Just(Some(AddressKind::Writable)),
    ]
}

fn flags_strategy() -> impl Strategy<Value = TempRefEscapeFlags> {
    (0u8..8).prop_map(TempRefEscapeFlags::from_bits_truncate)
}

/// Receiver facts: type index, addressing mode, accessor readonly, scope.
type ReceiverCase = (usize, Option<AddressKind>, bool, ScopedKind);

/// An owned, generatable description of a call shape.
#[derive(Clone, Debug)]
struct ShapeCase {
    return_ty: usize,
    return_ref: RefKind,
    used: bool,
    receiver: Option<ReceiverCase>,
    params: Vec<(usize, RefKind, ScopedKind)>,
    flags: TempRefEscapeFlags,
}

fn arb_shape() -> impl Strategy<Value = ShapeCase> {
    (
        0..8usize,
        ref_kind_strategy(),
        any::<bool>(),
        proptest::option::of((0..8usize, address_strategy(), any::<bool>(), scope_strategy())),
        proptest::collection::vec((0..8usize, ref_kind_strategy(), scope_strategy()), 0..6),
        flags_strategy(),
    )
        .prop_map(
            |(return_ty, return_ref, used, receiver, params, flags)| ShapeCase {
                return_ty,
                return_ref,
                used,
                receiver,
                params,
                flags,
            },
        )
}

fn verdict(
    types: &TypeTable,
    ids: &[TypeId],
    case: &ShapeCase,
    args_to_params: Option<&[u32]>,
) -> bool {
    let params: Vec<ParamSig> = case
        .params
        .iter()
        .map(|&(ty, ref_kind, scope)| ParamSig {
            ty: ids[ty],
            ref_kind,
            scope,
        })
        .collect();
    let arguments: Vec<ExprId> = (0..params.len())
        .map(|i| ExprId::new(u32::try_from(i).unwrap()))
        .collect();

    let shape = CallShape {
        return_type: ids[case.return_ty],
        return_ref_kind: case.return_ref,
        used: case.used,
        receiver_type: case.receiver.map(|(ty, ..)| ids[ty]),
        receiver_address: case.receiver.and_then(|(_, address, ..)| address),
        is_receiver_readonly: case.receiver.is_some_and(|(_, _, readonly, _)| readonly),
        receiver_scope: case.receiver.map_or(ScopedKind::None, |(.., scope)| scope),
        parameters: &params,
        arguments: &arguments,
        args_to_params,
        expanded: false,
        escape_flags: case.flags,
    };
    might_escape(types, &shape)
}

/// Generate a case together with a random permutation of its argument
/// positions.
fn shape_and_permutation() -> impl Strategy<Value = (ShapeCase, Vec<u32>)> {
    arb_shape().prop_flat_map(|case| {
        let n = u32::try_from(case.params.len()).unwrap();
        let identity: Vec<u32> = (0..n).collect();
        (Just(case), Just(identity).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn flags_only_narrow_the_verdict(case in arb_shape()) {
        let (types, ids) = fact_table();
        let base = {
            let mut unflagged = case.clone();
            unflagged.flags = TempRefEscapeFlags::empty();
            verdict(&types, &ids, &unflagged, None)
        };
        // Whatever flags the generator picked, they can only turn true
        // into false.
        prop_assert!(base || !verdict(&types, &ids, &case, None));

        for flag in [
            TempRefEscapeFlags::CANNOT_ESCAPE_FROM_RECEIVER,
            TempRefEscapeFlags::CANNOT_ESCAPE_TO_ARGUMENTS,
            TempRefEscapeFlags::CANNOT_ESCAPE_FROM_ARGUMENTS,
        ] {
            let current = verdict(&types, &ids, &case, None);
            let mut narrowed = case.clone();
            narrowed.flags |= flag;
            prop_assert!(current || !verdict(&types, &ids, &narrowed, None));
        }
    }

    #[test]
    fn discarding_the_result_only_narrows(case in arb_shape()) {
        let (types, ids) = fact_table();
        let mut used = case.clone();
        used.used = true;
        let mut discarded = case;
        discarded.used = false;
        prop_assert!(
            verdict(&types, &ids, &used, None) || !verdict(&types, &ids, &discarded, None)
        );
    }

    #[test]
    fn value_scoped_param_is_inert(
        case in arb_shape(),
        kind_a in ref_kind_strategy(),
        kind_b in ref_kind_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!case.params.is_empty());
        let (types, ids) = fact_table();
        let i = pick.index(case.params.len());

        let mut a = case;
        a.params[i].2 = ScopedKind::ScopedValue;
        a.params[i].1 = kind_a;
        let mut b = a.clone();
        b.params[i].1 = kind_b;

        prop_assert_eq!(
            verdict(&types, &ids, &a, None),
            verdict(&types, &ids, &b, None)
        );
    }

    #[test]
    fn value_scoped_receiver_is_inert(
        case in arb_shape(),
        ty in 0..8usize,
        readonly in any::<bool>(),
        addr_a in address_strategy(),
        addr_b in address_strategy(),
    ) {
        let (types, ids) = fact_table();

        let mut a = case;
        a.receiver = Some((ty, addr_a, readonly, ScopedKind::ScopedValue));
        let mut b = a.clone();
        b.receiver = Some((ty, addr_b, readonly, ScopedKind::ScopedValue));

        prop_assert_eq!(
            verdict(&types, &ids, &a, None),
            verdict(&types, &ids, &b, None)
        );
    }

    #[test]
    fn permuting_arguments_does_not_change_the_verdict(
        (case, permutation) in shape_and_permutation()
    ) {
        let (types, ids) = fact_table();
        // The same parameters get counted either way; only the iteration
        // order (and where the short-circuit fires) differs.
        let sequential = verdict(&types, &ids, &case, None);
        let permuted = verdict(&types, &ids, &case, Some(&permutation));
        prop_assert_eq!(sequential, permuted);
    }
}
