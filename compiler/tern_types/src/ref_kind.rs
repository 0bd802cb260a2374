//! By-reference passing kinds for parameters and returns.

/// How a parameter or return value is passed: by copy or by address.
///
/// Returns only ever use `None`, `Ref`, or `RefReadOnly`; the remaining
/// kinds are parameter-only.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum RefKind {
    /// Passed by value.
    #[default]
    None,

    /// Mutable reference (`ref`): the callee may read and write through
    /// the caller's storage.
    Ref,

    /// Input reference (`in`): caller-supplied address, read-only for the
    /// callee.
    In,

    /// Output reference (`out`): the callee must assign through it before
    /// returning; the caller's storage is writable to the callee.
    Out,

    /// Read-only reference return or parameter (`ref readonly`): the
    /// caller-side alias is observable but nothing may be written through
    /// it.
    RefReadOnly,
}

impl RefKind {
    /// Whether the callee can write through this reference.
    ///
    /// A writable reference channel is both a sink for the call's side
    /// effects and a source: the caller's storage is observable to the
    /// callee for the whole call.
    #[inline]
    pub const fn is_writable_reference(self) -> bool {
        matches!(self, Self::Ref | Self::Out)
    }

    /// Whether this is any by-reference kind.
    #[inline]
    pub const fn is_reference(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get the surface-syntax name for this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ref => "ref",
            Self::In => "in",
            Self::Out => "out",
            Self::RefReadOnly => "ref readonly",
        }
    }
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
