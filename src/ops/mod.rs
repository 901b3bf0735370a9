//! Lazy and terminal sequence operators.
//!
//! Each operator is a curried constructor: `take(3)` returns a unary stage
//! that accepts any sequence, which makes the operators compose with
//! [`pipe!`](crate::pipe!):
//!
//! ```
//! use advent_pipes::{map, pipe, skip, sum, take};
//!
//! let total = pipe!(1..=10, skip(2), take(3), map(|x: i32| x * x), sum(0));
//! assert_eq!(total, 9 + 16 + 25);
//! ```
//!
//! All stages are pull-based except [`scan`], which materializes its input.

mod adapters;
mod scan;
mod terminal;

pub use adapters::{Map, Repeat, Skip, SkipWhile, Take, TakeWhile};
pub use scan::Scan;
pub use terminal::{last_of, sum_from};

use std::ops::Add;

use crate::seq::Sequence;
use crate::tee::{tee, tee_iter, Teed, TeeSide};

/// Stage yielding `f(x)` for every element.
pub fn map<I, F, Y>(f: F) -> impl FnOnce(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Y,
{
    move |xs| Map {
        iter: xs.into_iter(),
        f,
    }
}

/// Stage dropping the first `n` elements.
pub fn skip<I: IntoIterator>(n: usize) -> impl FnOnce(I) -> Skip<I::IntoIter> {
    move |xs| Skip {
        iter: xs.into_iter(),
        remaining: n,
    }
}

/// Stage yielding at most the first `n` elements.
pub fn take<I: IntoIterator>(n: usize) -> impl FnOnce(I) -> Take<I::IntoIter> {
    move |xs| Take {
        iter: xs.into_iter(),
        remaining: n,
    }
}

/// Stage splitting a sequence into its first `n` elements and the rest.
///
/// Both halves come from a [`tee`] of the input, so they can be consumed in
/// either order without reading the source twice.
pub fn split_at<C, I>(n: usize) -> impl FnOnce(Sequence<C, I>) -> (Take<Teed<C, I>>, Skip<Teed<C, I>>)
where
    C: IntoIterator + Clone,
    I: Iterator<Item = C::Item>,
    C::Item: Clone,
{
    move |seq| {
        let (left, right) = tee(seq);
        (
            Take {
                iter: left,
                remaining: n,
            },
            Skip {
                iter: right,
                remaining: n,
            },
        )
    }
}

/// Stage discarding leading elements while `predicate` holds.
pub fn skip_while<I, P>(predicate: P) -> impl FnOnce(I) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    move |xs| SkipWhile {
        iter: xs.into_iter(),
        predicate,
        skipping: true,
    }
}

/// Stage yielding elements until `predicate` first fails.
pub fn take_while<I, P>(predicate: P) -> impl FnOnce(I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    move |xs| TakeWhile {
        iter: xs.into_iter(),
        predicate,
        done: false,
    }
}

/// Endless sequence of `value`.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        remaining: None,
    }
}

/// `value`, `count` times.
pub fn repeat_n<T: Clone>(value: T, count: usize) -> Repeat<T> {
    Repeat {
        value,
        remaining: Some(count),
    }
}

/// Stage producing every intermediate result of folding with `combine`.
///
/// `combine(acc, element, index, snapshot)` receives the whole input as
/// `snapshot`; see [`Scan`].
pub fn scan<I, R, F>(combine: F, init: R) -> impl FnOnce(I) -> Scan<I::Item, R, F>
where
    I: IntoIterator,
    R: Clone,
    F: FnMut(R, &I::Item, usize, &[I::Item]) -> R,
{
    move |xs| Scan::new(xs, init, combine)
}

/// Terminal stage adding every element onto `initial`.
pub fn sum<I, T>(initial: T) -> impl FnOnce(I) -> T
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T>,
{
    move |xs| sum_from(xs, initial)
}

/// Terminal stage returning the final element, or `None` for an empty sequence.
pub fn last<I: IntoIterator>() -> impl FnOnce(I) -> Option<I::Item> {
    last_of::<I>
}

/// Method forms of the operators `Iterator` does not already provide.
pub trait SeqExt: Iterator + Sized {
    /// Split this iterator into two independently advancing sides.
    fn tee(self) -> (TeeSide<Self>, TeeSide<Self>)
    where
        Self::Item: Clone,
    {
        tee_iter(self)
    }

    /// First `n` elements and the rest, sharing one pass over `self`.
    fn split_at(self, n: usize) -> (Take<TeeSide<Self>>, Skip<TeeSide<Self>>)
    where
        Self::Item: Clone,
    {
        let (left, right) = tee_iter(self);
        (
            Take {
                iter: left,
                remaining: n,
            },
            Skip {
                iter: right,
                remaining: n,
            },
        )
    }

    /// Snapshotting scan with index and lookbehind; see [`scan`].
    fn scan_with<R, F>(self, init: R, combine: F) -> Scan<Self::Item, R, F>
    where
        R: Clone,
        F: FnMut(R, &Self::Item, usize, &[Self::Item]) -> R,
    {
        Scan::new(self, init, combine)
    }

    /// Sum starting from `initial` instead of the additive identity.
    fn sum_from(self, initial: Self::Item) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item>,
    {
        sum_from(self, initial)
    }
}

impl<I: Iterator> SeqExt for I {}
