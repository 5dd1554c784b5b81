use super::Cursor;

/// A cursor applying a transform to every element pulled from upstream.
///
/// The transform runs exactly once per upstream element actually pulled —
/// elements a downstream stage never asks for are never transformed.
#[derive(Debug, Clone)]
pub struct MapCursor<C, F> {
    upstream: C,
    transform: F,
}

impl<C, F> MapCursor<C, F> {
    pub fn new(upstream: C, transform: F) -> Self {
        MapCursor { upstream, transform }
    }
}

impl<C, F, B> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> B,
{
    type Item = B;

    fn pull(&mut self) -> Option<Self::Item> {
        self.upstream.pull().map(&self.transform)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
