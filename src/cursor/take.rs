use super::Cursor;

/// A cursor truncating its upstream after a fixed number of elements.
///
/// Once the budget is spent the upstream is never pulled again, so elements
/// beyond the cut-off are never computed.
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn new(upstream: C, count: usize) -> Self {
        TakeCursor {
            upstream,
            remaining: count,
        }
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.pull()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
