//! Receiver addressing modes at a call site.

/// How the emitter is addressing a receiver when it invokes a member on
/// it.
///
/// Known only at the emission site, so adapters take it as a parameter
/// rather than reading it off the bound node. Absence (the receiver is a
/// loaded value, not an address) is modeled with `Option<AddressKind>`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum AddressKind {
    /// The address may only be read through; taken for receivers that
    /// must not be mutated in place (readonly fields, `in` temps).
    ReadOnly,

    /// The address is writable; the callee can mutate the caller-visible
    /// storage through it.
    Writable,
}

impl AddressKind {
    /// Whether the callee can write through this address.
    #[inline]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Writable)
    }
}
