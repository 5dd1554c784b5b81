use super::Sequence;
use crate::cursor::FilterCursor;

/// A lazy node keeping only the upstream elements accepted by a predicate.
///
/// The node owns both its upstream and its predicate — never a borrow of a
/// caller's local closure — so its lifetime is self-contained. Cursors built
/// from it borrow the predicate for the duration of one traversal.
#[derive(Debug, Clone)]
pub struct Filtered<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    pub(super) fn new(upstream: S, predicate: P) -> Self {
        Filtered {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor::new(self.upstream.cursor(), &self.predicate)
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::{from, range};
    use super::*;

    #[test]
    fn filters_lazily_and_restartably() {
        let query = range(0, 20).filter(|i| i % 5 == 0);
        assert_eq!(query.to_vector(), [0, 5, 10, 15]);
        assert_eq!(query.to_vector(), [0, 5, 10, 15]);
    }

    #[test]
    fn stacked_filters() {
        let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let result = from(&v)
            .filter(|i| i % 2 == 0)
            .filter(|i| i % 3 == 0)
            .to_vector();
        assert_eq!(result, [6, 12]);
    }
}
