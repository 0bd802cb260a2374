//! Per-call-site escape facts proven by upstream analysis.

use bitflags::bitflags;

bitflags! {
    /// Channels an earlier refinement pass has proven escape-safe for one
    /// specific call site.
    ///
    /// Write-once data attached to the bound node by the binder (for
    /// example when the receiver is a brand-new temporary with no outside
    /// aliases). Each flag only narrows which channels the escape
    /// analysis counts; none can widen the verdict.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TempRefEscapeFlags: u8 {
        /// No address can be leaked out of the call through the receiver.
        const CANNOT_ESCAPE_FROM_RECEIVER = 1 << 0;

        /// No address can be captured into a writable argument.
        const CANNOT_ESCAPE_TO_ARGUMENTS = 1 << 1;

        /// No address can be leaked out of the call through an argument.
        const CANNOT_ESCAPE_FROM_ARGUMENTS = 1 << 2;
    }
}
