use super::Cursor;

/// A cursor discarding a fixed-length prefix of its upstream.
///
/// The prefix is pulled (and paid for) on the first downstream pull, not at
/// construction time.
#[derive(Debug, Clone)]
pub struct SkipCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C> SkipCursor<C> {
    pub fn new(upstream: C, count: usize) -> Self {
        SkipCursor {
            upstream,
            remaining: count,
        }
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
