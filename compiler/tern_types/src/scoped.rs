//! Declared lifetime restrictions on parameters and receivers.

/// Scope annotation on a parameter or the implicit receiver.
///
/// A three-valued lattice, ordered by how much the annotation excludes:
/// `ScopedValue` removes the channel from escape accounting entirely,
/// `ScopedRef` narrows it, `None` leaves it unrestricted. These are never
/// interchangeable booleans; the analyzer distinguishes all three.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum ScopedKind {
    /// No restriction declared.
    #[default]
    None,

    /// `scoped ref`: a reference derived from the channel's address may
    /// not propagate beyond the callee.
    ScopedRef,

    /// `scoped` by value: the value provably cannot expose any reference
    /// to itself, mutable or not.
    ScopedValue,
}

impl ScopedKind {
    /// Whether no restriction was declared.
    #[inline]
    pub const fn is_unscoped(self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether this annotation removes the channel from escape accounting
    /// entirely.
    #[inline]
    pub const fn excludes_channel(self) -> bool {
        matches!(self, Self::ScopedValue)
    }

    /// Get the surface-syntax name for this annotation.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::ScopedRef => "scoped ref",
            Self::ScopedValue => "scoped",
        }
    }
}

impl std::fmt::Display for ScopedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unscoped() {
        assert_eq!(ScopedKind::default(), ScopedKind::None);
        assert!(ScopedKind::None.is_unscoped());
    }

    #[test]
    fn only_scoped_value_excludes() {
        assert!(!ScopedKind::None.excludes_channel());
        assert!(!ScopedKind::ScopedRef.excludes_channel());
        assert!(ScopedKind::ScopedValue.excludes_channel());
    }

    #[test]
    fn scoped_ref_is_not_unscoped() {
        assert!(!ScopedKind::ScopedRef.is_unscoped());
        assert!(!ScopedKind::ScopedValue.is_unscoped());
    }

    #[test]
    fn display_names() {
        assert_eq!(ScopedKind::ScopedRef.to_string(), "scoped ref");
        assert_eq!(ScopedKind::ScopedValue.to_string(), "scoped");
    }
}
