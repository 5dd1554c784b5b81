use super::Cursor;

/// One-unit advance over an ordered counter type, as needed for generating
/// half-open ranges.
pub trait Step: Copy + PartialOrd {
    /// The successor of `self`
    fn forward(self) -> Self;
}

macro_rules! step_for_integers {
    ($($t:ty)*) => ($(
        impl Step for $t {
            fn forward(self) -> Self {
                self + 1
            }
        }
    )*)
}

step_for_integers!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

/// A source cursor generating the half-open range `[start, end_exclusive)`.
#[derive(Debug, Clone)]
pub struct RangeCursor<N> {
    current: N,
    end: N,
}

impl<N> RangeCursor<N> {
    pub fn new(start: N, end_exclusive: N) -> Self {
        RangeCursor {
            current: start,
            end: end_exclusive,
        }
    }
}

impl<N: Step> Cursor for RangeCursor<N> {
    type Item = N;

    fn pull(&mut self) -> Option<Self::Item> {
        // Ordering guard, not an equality guard: a reversed range
        // (start > end) is exhausted from the outset instead of counting
        // upward forever.
        if self.current >= self.end {
            return None;
        }
        let element = self.current;
        self.current = self.current.forward();
        Some(element)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
