use super::Sequence;
use crate::cursor::{RangeCursor, SliceCursor, Step};

/// A root node borrowing a backing slice.
///
/// Constructing one copies nothing: the node holds iteration positions into
/// the caller's storage, and the lifetime parameter guarantees the storage
/// outlives the node and every cursor built from it.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a, T> {
    backing: &'a [T],
}

impl<T: Clone> Sequence for Source<'_, T> {
    type Item = T;
    type Cursor<'b>
        = SliceCursor<'b, T>
    where
        Self: 'b;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.backing)
    }
}

/// A root node owning its elements.
///
/// Returned by [`from_owned`] and by the eager `distinct` terminal, where it
/// doubles as the explicit marker for "this is a materialized snapshot, not
/// a view of the live source".
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    backing: Vec<T>,
}

impl<T: Clone> Sequence for Snapshot<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(&self.backing)
    }
}

/// A root node generating the half-open numeric range `[start, end)`.
/// A reversed range (`start > end`) is empty, like a degenerate one.
#[derive(Debug, Clone, Copy)]
pub struct Range<N> {
    start: N,
    end: N,
}

impl<N: Step> Sequence for Range<N> {
    type Item = N;
    type Cursor<'a>
        = RangeCursor<N>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RangeCursor::new(self.start, self.end)
    }
}

/// Start a query over a borrowed collection.
pub fn from<T>(collection: &[T]) -> Source<'_, T> {
    Source {
        backing: collection,
    }
}

/// Start a query over a collection moved into the query itself, for when
/// the backing data has no business outliving the pipeline.
pub fn from_owned<T>(collection: impl Into<Vec<T>>) -> Snapshot<T> {
    Snapshot {
        backing: collection.into(),
    }
}

/// Start a query over the generated half-open range `[start, end_exclusive)`.
pub fn range<N: Step>(start: N, end_exclusive: N) -> Range<N> {
    Range {
        start,
        end: end_exclusive,
    }
}

// ----- T E S T S ---------------------------------------------------------------------
