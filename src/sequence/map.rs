use super::Sequence;
use crate::cursor::MapCursor;

/// A lazy node transforming every upstream element, possibly into a new
/// element type. Owns its upstream and its transform.
#[derive(Debug, Clone)]
pub struct Mapped<S, F> {
    upstream: S,
    transform: F,
}

impl<S, F> Mapped<S, F> {
    pub(super) fn new(upstream: S, transform: F) -> Self {
        Mapped {
            upstream,
            transform,
        }
    }
}

impl<S, F, B> Sequence for Mapped<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Cursor<'a>
        = MapCursor<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor::new(self.upstream.cursor(), &self.transform)
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::{from, range};
    use super::*;

    #[test]
    fn maps_lazily_and_restartably() {
        let query = range(1, 4).map(|i| i * i);
        assert_eq!(query.to_vector(), [1, 4, 9]);
        assert_eq!(query.to_vector(), [1, 4, 9]);
    }

    #[test]
    fn changes_the_element_type() {
        let animals = crate::some_animals();
        let lengths = from(&animals).map(|name| name.len()).to_vector();
        assert_eq!(lengths, [3, 5, 5, 6]);
    }

    #[test]
    fn stacked_maps() {
        let query = range(0, 3).map(|i| i + 1).map(|i| i * 10);
        assert_eq!(query.to_vector(), [10, 20, 30]);
    }
}
