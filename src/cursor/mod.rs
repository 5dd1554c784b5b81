//! The traversal workhorses underneath the `Sequence` facade.
//!
//! A cursor is the stateful half of the design: sequences are immutable
//! descriptions, cursors do the walking. Every terminal operation asks its
//! sequence for a fresh cursor, drains (part of) it, and drops it — a cursor
//! is never reused across traversals.

mod filter;
mod map;
mod range;
mod skip;
mod slice;
mod take;

pub use filter::FilterCursor;
pub use map::MapCursor;
pub use range::{RangeCursor, Step};
pub use skip::SkipCursor;
pub use slice::SliceCursor;
pub use take::TakeCursor;

/// A single-use, pull-based traversal over a chain of stages.
///
/// `pull()` produces the next element, or `None` once the cursor is
/// exhausted. The state machine is `NotStarted -> Pulling -> Exhausted`,
/// where the first two states are observably identical (the first pull is
/// unconditional), and `Exhausted` is terminal: every implementation in this
/// crate is *fused* — once `pull()` has returned `None` it returns `None` on
/// every later call, never resurrecting.
///
/// Cursors exclusively own their upstream cursor, so a cursor chain is a
/// strict tree. Branching happens one level up, on sequences.
pub trait Cursor {
    type Item;

    /// Produce the next element, or `None` when exhausted.
    fn pull(&mut self) -> Option<Self::Item>;
}
