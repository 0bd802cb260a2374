//! Argument-to-parameter correspondence.
//!
//! Owned by the binder: downstream passes call this instead of
//! re-implementing argument binding rules.

use tern_types::ParamSig;

/// Resolve the parameter an argument position binds to.
///
/// With no permutation the mapping is positional. Positions past the
/// declared parameter count resolve to `None`. In expanded form an
/// argument binding to the trailing variadic collector also resolves to
/// `None`: such arguments are copied into the collector, not passed by
/// address, so no downstream pass should attribute the collector's
/// declaration to them.
pub fn corresponding_parameter<'p>(
    arg_index: usize,
    params: &'p [ParamSig],
    args_to_params: Option<&[u32]>,
    expanded: bool,
) -> Option<&'p ParamSig> {
    let param_index = match args_to_params {
        Some(mapping) => {
            debug_assert!(
                mapping.len() > arg_index,
                "argument {arg_index} missing from args-to-params mapping"
            );
            *mapping.get(arg_index)? as usize
        }
        None => arg_index,
    };

    if param_index >= params.len() {
        return None;
    }
    if expanded && param_index == params.len() - 1 {
        return None;
    }
    Some(&params[param_index])
}
