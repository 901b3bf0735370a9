//! Pull-based adapter state machines.
//!
//! Every adapter computes one output element per `next()` call and never
//! reads further ahead in its source than that element requires.

use std::fmt;

/// Applies a function to every element, 1:1 and in order.
pub struct Map<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}

impl<I, F, Y> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Y,
{
    type Item = Y;

    fn next(&mut self) -> Option<Y> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

/// Drops the first `n` elements, then yields the rest.
#[derive(Debug, Clone)]
pub struct Skip<I> {
    pub(crate) iter: I,
    pub(crate) remaining: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}

/// Yields at most the first `n` elements.
///
/// After the `n`-th element the source is abandoned: element `n + 1` is never pulled.
#[derive(Debug, Clone)]
pub struct Take<I> {
    pub(crate) iter: I,
    pub(crate) remaining: usize,
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

/// Discards leading elements while a predicate holds.
///
/// The first element failing the predicate is yielded, and from then on every
/// element passes through untested. A source exhausted while still skipping
/// yields nothing.
pub struct SkipWhile<I, P> {
    pub(crate) iter: I,
    pub(crate) predicate: P,
    pub(crate) skipping: bool,
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.skipping {
            return self.iter.next();
        }
        self.skipping = false;
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.skipping {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("skipping", &self.skipping)
            .finish()
    }
}

/// Yields elements while a predicate holds; stops at the first failure
/// without yielding it.
pub struct TakeWhile<I, P> {
    pub(crate) iter: I,
    pub(crate) predicate: P,
    pub(crate) done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}

/// Yields one value a fixed number of times, or forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    pub(crate) value: T,
    /// `None` repeats without end.
    pub(crate) remaining: Option<usize>,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.remaining {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (usize::MAX, None),
            Some(n) => (n, Some(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that panics when pulled past `limit` elements.
    struct Tripwire {
        next: u32,
        limit: u32,
    }

    impl Iterator for Tripwire {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            assert!(self.next < self.limit, "source pulled past {}", self.limit);
            self.next += 1;
            Some(self.next - 1)
        }
    }

    #[test]
    fn test_take_never_pulls_past_n() {
        let take = Take {
            iter: Tripwire { next: 0, limit: 3 },
            remaining: 3,
        };
        assert_eq!(take.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let skip = Skip {
            iter: 0..3,
            remaining: 5,
        };
        assert_eq!(skip.count(), 0);
    }

    #[test]
    fn test_skip_while_stops_testing_after_first_failure() {
        let skip = SkipWhile {
            iter: vec![1, 2, 5, 1, 2].into_iter(),
            predicate: |x: &i32| *x < 3,
            skipping: true,
        };
        assert_eq!(skip.collect::<Vec<_>>(), vec![5, 1, 2]);
    }

    #[test]
    fn test_skip_while_yields_final_failing_element() {
        let skip = SkipWhile {
            iter: vec![1, 2, 9].into_iter(),
            predicate: |x: &i32| *x < 3,
            skipping: true,
        };
        assert_eq!(skip.collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_take_while_is_fused_after_failure() {
        let mut take = TakeWhile {
            iter: vec![1, 2, 9, 1].into_iter(),
            predicate: |x: &i32| *x < 3,
            done: false,
        };
        assert_eq!(take.next(), Some(1));
        assert_eq!(take.next(), Some(2));
        assert_eq!(take.next(), None);
        assert_eq!(take.next(), None);
    }

    #[test]
    fn test_repeat_counts_down() {
        let repeat = Repeat {
            value: 'x',
            remaining: Some(3),
        };
        assert_eq!(repeat.size_hint(), (3, Some(3)));
        assert_eq!(repeat.collect::<String>(), "xxx");
    }
}
