//! Code generation back end for the Tern compiler.
//!
//! The part that lives here today is the soundness gate for call
//! emission:
//!
//! ```text
//! bound call node
//!        ↓
//!   CallShape        (per-node adapters, trivial field projections)
//!        ↓
//!   might_escape     (could a temporary's address outlive the call?)
//!        ↓
//!   CallEmitStrategy (Direct, or Defensive with pinned temporaries)
//! ```
//!
//! A wrong `false` from `might_escape` is a dangling reference in the
//! emitted program; a wrong `true` only costs an extra temporary. Every
//! rule in `ref_safety` leans toward `true` when in doubt.

mod address;
mod emit;
pub mod ref_safety;

pub use address::AddressKind;
pub use emit::{call_emit_strategy, CallEmitStrategy};
pub use ref_safety::{might_escape, CallShape};
