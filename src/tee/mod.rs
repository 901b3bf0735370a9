//! Sequence duplication.
//!
//! Splits one source into two sides that yield the same elements in the same
//! order while advancing at independent rates. The source is pulled at most
//! once per element; memory is bounded by the distance between the two sides.

mod pair;
mod stream;

pub use pair::{tee_iter, TeeSide};
pub use stream::{tee_stream, tee_stream_n, StreamTeeSide};

use crate::seq::{Sequence, Traversal};

/// One of the two outputs of a tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// First output.
    Left,
    /// Second output.
    Right,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Output of [`tee`]: either an independent container traversal or a buffered side.
pub type Teed<C, I> = Traversal<<C as IntoIterator>::IntoIter, TeeSide<I>>;

/// Split a sequence into two independently consumable sequences.
///
/// A re-iterable source needs no buffering: both outputs are fresh
/// traversals of the same container. A single-pass source is shared through
/// a [`TeeSide`] pair.
pub fn tee<C, I>(seq: Sequence<C, I>) -> (Teed<C, I>, Teed<C, I>)
where
    C: IntoIterator + Clone,
    I: Iterator<Item = C::Item>,
    C::Item: Clone,
{
    match seq.into_source() {
        Ok(container) => (
            Traversal::Fresh(container.clone().into_iter()),
            Traversal::Fresh(container.into_iter()),
        ),
        Err(cursor) => {
            let (left, right) = tee_iter(cursor);
            (Traversal::Shared(left), Traversal::Shared(right))
        }
    }
}
