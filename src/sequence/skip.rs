use super::Sequence;
use crate::cursor::SkipCursor;

/// A lazy node discarding the first `count` upstream elements.
#[derive(Debug, Clone)]
pub struct Skipped<S> {
    upstream: S,
    count: usize,
}

impl<S> Skipped<S> {
    pub(super) fn new(upstream: S, count: usize) -> Self {
        Skipped { upstream, count }
    }
}

impl<S: Sequence> Sequence for Skipped<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SkipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        SkipCursor::new(self.upstream.cursor(), self.count)
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::{from, range};
    use super::*;

    #[test]
    fn skipping_is_restartable() {
        let query = range(0, 6).skip(4);
        assert_eq!(query.to_vector(), [4, 5]);
        assert_eq!(query.to_vector(), [4, 5]);
    }

    #[test]
    fn skip_interacts_with_filter() {
        let v = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let result = from(&v).filter(|i| i % 2 == 0).skip(1).to_vector();
        assert_eq!(result, [4, 6, 8]);
    }
}
