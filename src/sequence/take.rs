use super::Sequence;
use crate::cursor::TakeCursor;

/// A lazy node keeping at most the first `count` upstream elements.
#[derive(Debug, Clone)]
pub struct Taken<S> {
    upstream: S,
    count: usize,
}

impl<S> Taken<S> {
    pub(super) fn new(upstream: S, count: usize) -> Self {
        Taken { upstream, count }
    }
}

impl<S: Sequence> Sequence for Taken<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor::new(self.upstream.cursor(), self.count)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
