use super::Cursor;
use std::slice;

/// A source cursor walking a borrowed slice, cloning each element out.
///
/// Only iteration positions are borrowed — the backing storage is never
/// copied wholesale, and the borrow makes "the backing sequence outlives
/// every cursor derived from it" a compile-time guarantee instead of a
/// documented hazard.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    elements: slice::Iter<'a, T>,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(backing: &'a [T]) -> Self {
        SliceCursor {
            elements: backing.iter(),
        }
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Option<Self::Item> {
        self.elements.next().cloned()
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_in_order() {
        let backing = vec![15, 21];
        let mut cursor = SliceCursor::new(&backing);
        assert_eq!(cursor.pull(), Some(15));
        assert_eq!(cursor.pull(), Some(21));
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn empty_backing() {
        let backing: Vec<i32> = Vec::new();
        let mut cursor = SliceCursor::new(&backing);
        assert_eq!(cursor.pull(), None);
    }

    #[test]
    fn leaves_backing_untouched() {
        let backing = crate::some_animals();
        let mut cursor = SliceCursor::new(&backing);
        while cursor.pull().is_some() {}
        assert_eq!(backing.len(), 4);
        assert_eq!(backing[0], "cat");
    }
}
