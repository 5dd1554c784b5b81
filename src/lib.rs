//! *A platform for experiments with lazy sequence queries and pull-based
//! data flow*.
//!
//! A **sequence** is an immutable, restartable description of a query over
//! some backing data: a borrowed slice, an owned collection, or a generated
//! numeric range, optionally piped through filtering and mapping stages.
//! Building a sequence does no work. All work happens when a *terminal
//! operation* drains a **cursor** — a cheap, single-use traversal object the
//! sequence manufactures on demand — and every element flows through the
//! entire chain exactly once, with no intermediate containers.
//!
//! ```
//! use sequery::prelude::*;
//!
//! let v = vec![15, 21];
//! let result = from(&v)
//!     .filter(|i| *i < 20)
//!     .map(|i| i + 100)
//!     .to_vector();
//! assert_eq!(result, [115]);
//! ```
//!
//! Terminal operations take the sequence by reference, so the same query can
//! be re-run any number of times, and several independent chains may branch
//! off a shared upstream node:
//!
//! ```
//! use sequery::prelude::*;
//!
//! let digits = range(0, 10);
//! let even = (&digits).filter(|i| i % 2 == 0);
//! let odd = (&digits).filter(|i| i % 2 == 1);
//! assert_eq!(even.sum(0) + odd.sum(0), digits.sum(0));
//! ```
//!
//! Most stages are lazy. The exceptions are the materializing terminals
//! (`to_vector`, `to_set`, `order_by`, `sum`) and `distinct`, which must
//! drain their upstream by construction; `distinct` hands the deduplicated
//! snapshot back as a new sequence, so anything composed after it queries the
//! snapshot, not the live source.

pub mod cursor;
pub mod sequence;

use thiserror::Error;

/// Contract failures reported by the fallible terminal operations.
///
/// The library has no operational failure modes — everything is pure,
/// in-memory computation — so the only errors are sequences whose shape
/// does not match what the caller demanded of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sequence produced no elements where at least one was required
    #[error("empty sequence")]
    Empty,

    /// The sequence produced more than one element where exactly one was required
    #[error("more than one element in sequence")]
    Ambiguous,
}

/// Preamble for users of the library: the two traits, the three entry
/// points, and the node types they return.
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::sequence::{from, from_owned, range};
    pub use crate::sequence::{Filtered, Mapped, Range, Sequence, Skipped, Snapshot, Source, Taken};
    pub use crate::Error;
}

// A few fixtures shared by the in-module test suites.
#[cfg(test)]
pub(crate) fn some_animals() -> Vec<String> {
    ["cat", "bunny", "doggy", "horsey"].map(String::from).to_vec()
}
