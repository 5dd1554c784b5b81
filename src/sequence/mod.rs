//! The declarative facade over the cursor machinery.
//!
//! A `Sequence` is a restartable description of a query: a root node over
//! some backing data, wrapped in zero or more lazy adaptor nodes. Nothing
//! runs until a terminal operation manufactures a cursor and drains it, and
//! because `cursor()` takes `&self`, the description survives every
//! traversal unchanged — running the same query twice gives the same answer
//! twice.

mod filter;
mod map;
mod skip;
mod source;
mod take;

pub use filter::Filtered;
pub use map::Mapped;
pub use skip::Skipped;
pub use source::{from, from_owned, range, Range, Snapshot, Source};
pub use take::Taken;

use crate::cursor::Cursor;
use crate::Error;
use log::trace;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use std::ops::Add;

/// An immutable, restartable description of a sequence query.
///
/// Combinators consume `self` and hand back a new node wrapping it; to
/// branch several chains off one shared upstream, borrow it — `&S` is a
/// `Sequence` whenever `S` is.
///
/// Terminal operations come in three flavors:
/// - *materializing* (`to_vector`, `to_set`, `distinct`, `order_by`): must
///   drain the whole upstream into a concrete container by construction;
/// - *folding* (`sum`, `count`, `all`, `any`): drain the upstream but keep
///   only an accumulator;
/// - *short-circuiting* (`first`, `single`, `is_empty`, and `all`/`any` on
///   a deciding element): stop pulling as soon as the answer is known, so
///   upstream elements beyond that point are never computed.
pub trait Sequence {
    type Item;

    /// The cursor type this sequence manufactures. Borrows the sequence for
    /// the duration of one traversal.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Manufacture a fresh cursor over the full chain.
    ///
    /// Cheap, pure and repeatable: every call yields an independent,
    /// non-interfering traversal over the same immutable description.
    fn cursor(&self) -> Self::Cursor<'_>;

    // ----- L A Z Y   C O M B I N A T O R S -------------------------------------------

    /// Keep only the elements accepted by `predicate` (LINQ's `where`).
    fn filter<P>(self, predicate: P) -> Filtered<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filtered::new(self, predicate)
    }

    /// Transform every element through `transform` (LINQ's `select`).
    fn map<F, B>(self, transform: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Mapped::new(self, transform)
    }

    /// Keep at most the first `count` elements.
    fn take(self, count: usize) -> Taken<Self>
    where
        Self: Sized,
    {
        Taken::new(self, count)
    }

    /// Discard the first `count` elements.
    fn skip(self, count: usize) -> Skipped<Self>
    where
        Self: Sized,
    {
        Skipped::new(self, count)
    }

    // ----- M A T E R I A L I Z I N G   T E R M I N A L S -----------------------------

    /// Drain into a vector, preserving traversal order. Single pass.
    fn to_vector(&self) -> Vec<Self::Item> {
        let mut cursor = self.cursor();
        let mut result = Vec::new();
        while let Some(element) = cursor.pull() {
            result.push(element);
        }
        result
    }

    /// Drain into a deduplicated, unordered set.
    fn to_set(&self) -> FxHashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        let mut cursor = self.cursor();
        let mut result = FxHashSet::default();
        while let Some(element) = cursor.pull() {
            result.insert(element);
        }
        result
    }

    /// Deduplicate, eagerly.
    ///
    /// This is the one combinator-shaped operation that is *not* lazy: it
    /// drains the upstream into a set here and now, then hands the result
    /// back as a new root node. Stages composed after `distinct` query the
    /// returned snapshot, not the live original — later changes to the
    /// original backing data are invisible to them. Element order is not
    /// preserved.
    fn distinct(&self) -> Snapshot<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        let unique: Vec<Self::Item> = self.to_set().into_iter().collect();
        trace!("distinct: materialized {} unique elements", unique.len());
        from_owned(unique)
    }

    /// Drain into a vector sorted by the key `evaluation` extracts.
    ///
    /// The sort is stable: elements with equal keys keep their original
    /// relative order. The key type must be totally ordered — for float
    /// keys, wrap them in a total-order newtype such as
    /// `ordered_float::OrderedFloat` at the call site.
    fn order_by<E, K>(&self, evaluation: E) -> Vec<Self::Item>
    where
        E: Fn(&Self::Item) -> K,
        K: Ord,
    {
        let mut result = self.to_vector();
        trace!("order_by: materialized {} elements", result.len());
        result.sort_by_key(evaluation);
        result
    }

    // ----- F O L D I N G   T E R M I N A L S -----------------------------------------

    /// Fold with `+`, seeded at the caller-provided `zero`. Single pass, no
    /// intermediate materialization.
    fn sum(&self, zero: Self::Item) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item>,
    {
        let mut cursor = self.cursor();
        let mut result = zero;
        while let Some(element) = cursor.pull() {
            result = result + element;
        }
        result
    }

    /// The number of elements the sequence produces.
    fn count(&self) -> usize {
        let mut cursor = self.cursor();
        let mut n = 0;
        while cursor.pull().is_some() {
            n += 1;
        }
        n
    }

    /// True if `predicate` accepts every element. Short-circuits on the
    /// first rejection; vacuously true on an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(element) = cursor.pull() {
            if !predicate(&element) {
                return false;
            }
        }
        true
    }

    /// True if `predicate` accepts at least one element. Short-circuits on
    /// the first acceptance.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(element) = cursor.pull() {
            if predicate(&element) {
                return true;
            }
        }
        false
    }

    // ----- S H O R T - C I R C U I T I N G   T E R M I N A L S -----------------------

    /// True if the sequence produces no elements. Pulls at most one element.
    fn is_empty(&self) -> bool {
        self.cursor().pull().is_none()
    }

    /// The first element, if any. Pulls exactly one element — the rest of
    /// the upstream is never computed.
    fn first(&self) -> Option<Self::Item> {
        self.cursor().pull()
    }

    /// The one and only element.
    ///
    /// Fails with [`Error::Empty`] on an empty sequence and
    /// [`Error::Ambiguous`] as soon as a second element shows up; at most
    /// two elements are ever pulled.
    fn single(&self) -> Result<Self::Item, Error> {
        let mut cursor = self.cursor();
        let Some(element) = cursor.pull() else {
            return Err(Error::Empty);
        };
        if cursor.pull().is_some() {
            return Err(Error::Ambiguous);
        }
        Ok(element)
    }
}

/// Branching: several independent chains may share one upstream node by
/// borrowing it. The borrow keeps the shared node immutable for as long as
/// any branch is alive.
impl<S: Sequence> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
