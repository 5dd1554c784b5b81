use super::Cursor;

/// A cursor passing through only the upstream elements accepted by a
/// predicate.
///
/// One downstream pull may cost several upstream pulls — the skip loop below
/// runs until the upstream either yields an accepted element or runs dry.
/// The loop is bounded by the finite upstream, and the predicate is
/// evaluated at most once per candidate.
#[derive(Debug, Clone)]
pub struct FilterCursor<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        FilterCursor {
            upstream,
            predicate,
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.upstream.pull()?;
            if (self.predicate)(&candidate) {
                return Some(candidate);
            }
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{RangeCursor, SliceCursor};
    use std::cell::Cell;

    #[test]
    fn skips_rejected_elements() {
        let mut cursor = FilterCursor::new(RangeCursor::new(0, 10), |i: &i32| i % 3 == 0);
        assert_eq!(cursor.pull(), Some(0));
        assert_eq!(cursor.pull(), Some(3));
        assert_eq!(cursor.pull(), Some(6));
        assert_eq!(cursor.pull(), Some(9));
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn rejecting_everything_exhausts() {
        let mut cursor = FilterCursor::new(RangeCursor::new(0, 1000), |_: &i32| false);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn exhausted_upstream_short_circuits() {
        let mut cursor = FilterCursor::new(RangeCursor::new(0, 0), |_: &i32| true);
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn predicate_runs_at_most_once_per_candidate() {
        let backing = vec![1, 2, 3, 4];
        let evaluations = Cell::new(0);
        let mut cursor = FilterCursor::new(SliceCursor::new(&backing), |i: &i32| {
            evaluations.set(evaluations.get() + 1);
            i % 2 == 0
        });
        while cursor.pull().is_some() {}
        assert_eq!(evaluations.get(), 4);
    }
}
