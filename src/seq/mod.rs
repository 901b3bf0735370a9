//! Sequence adapter
//!
//! A sequence is either *re-iterable* (a container: every traversal starts
//! fresh and costs nothing to repeat) or *single-pass* (a cursor: pulling an
//! element advances shared state irreversibly). Operators that must read a
//! source twice, like [`tee`](crate::tee::tee), dispatch on this tag instead
//! of probing the value at runtime.

use std::fmt;
use std::iter::Empty;

/// Tagged sequence source.
pub struct Sequence<C: IntoIterator, I> {
    kind: Kind<C, I>,
}

enum Kind<C: IntoIterator, I> {
    Reiterable {
        source: C,
        /// Traversal handle handed out by [`Sequence::cursor`], reused until reset.
        cursor: Option<C::IntoIter>,
    },
    SinglePass(I),
}

impl<C> Sequence<C, C::IntoIter>
where
    C: IntoIterator,
{
    /// Wrap a container that can be traversed any number of times.
    pub fn reiterable(source: C) -> Self {
        Self {
            kind: Kind::Reiterable {
                source,
                cursor: None,
            },
        }
    }
}

impl<I> Sequence<Empty<I::Item>, I>
where
    I: Iterator,
{
    /// Wrap a traversal already in progress.
    pub fn single_pass(iter: I) -> Self {
        Self {
            kind: Kind::SinglePass(iter),
        }
    }
}

impl<C, I> Sequence<C, I>
where
    C: IntoIterator,
    I: Iterator<Item = C::Item>,
{
    /// Whether traversing this sequence consumes shared cursor state.
    pub fn is_single_pass(&self) -> bool {
        matches!(self.kind, Kind::SinglePass(_))
    }

    /// Split into the tagged parts: `Ok(container)` or `Err(cursor)`.
    ///
    /// A cursor cached by [`Sequence::cursor`] is discarded.
    pub fn into_source(self) -> Result<C, I> {
        match self.kind {
            Kind::Reiterable { source, .. } => Ok(source),
            Kind::SinglePass(iter) => Err(iter),
        }
    }

    /// Drop the cached traversal handle so the next traversal starts fresh.
    ///
    /// Has no effect on single-pass sequences.
    pub fn reset(&mut self) {
        if let Kind::Reiterable { cursor, .. } = &mut self.kind {
            *cursor = None;
        }
    }
}

impl<C, I> Sequence<C, I>
where
    C: IntoIterator + Clone,
    I: Iterator<Item = C::Item>,
{
    /// Borrow the traversal handle of this sequence.
    ///
    /// For a single-pass source this is the source itself. For a re-iterable
    /// source the first call creates a traversal and caches it; later calls
    /// (and a later [`IntoIterator::into_iter`]) continue that same traversal
    /// instead of opening a second independent one.
    pub fn cursor(&mut self) -> Traversal<&mut C::IntoIter, &mut I> {
        match &mut self.kind {
            Kind::Reiterable { source, cursor } => {
                Traversal::Fresh(cursor.get_or_insert_with(|| source.clone().into_iter()))
            }
            Kind::SinglePass(iter) => Traversal::Shared(iter),
        }
    }
}

impl<C, I> IntoIterator for Sequence<C, I>
where
    C: IntoIterator,
    I: Iterator<Item = C::Item>,
{
    type Item = C::Item;
    type IntoIter = Traversal<C::IntoIter, I>;

    fn into_iter(self) -> Self::IntoIter {
        match self.kind {
            Kind::Reiterable {
                cursor: Some(cursor),
                ..
            } => Traversal::Fresh(cursor),
            Kind::Reiterable { source, .. } => Traversal::Fresh(source.into_iter()),
            Kind::SinglePass(iter) => Traversal::Shared(iter),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<Vec<T>, std::vec::IntoIter<T>> {
    fn from(items: Vec<T>) -> Self {
        Sequence::reiterable(items)
    }
}

impl<C: IntoIterator, I> fmt::Debug for Sequence<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, cached) = match &self.kind {
            Kind::Reiterable { cursor, .. } => ("reiterable", cursor.is_some()),
            Kind::SinglePass(_) => ("single-pass", false),
        };
        f.debug_struct("Sequence")
            .field("kind", &kind)
            .field("cached_cursor", &cached)
            .finish()
    }
}

/// Traversal of either a fresh container iterator or a shared cursor.
#[derive(Debug, Clone)]
pub enum Traversal<A, B> {
    /// Independent traversal of a re-iterable source.
    Fresh(A),
    /// Traversal that advances shared single-pass state.
    Shared(B),
}

impl<A, B> Iterator for Traversal<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::Fresh(iter) => iter.next(),
            Traversal::Shared(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Traversal::Fresh(iter) => iter.size_hint(),
            Traversal::Shared(iter) => iter.size_hint(),
        }
    }
}
