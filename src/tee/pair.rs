use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::Side;

/// Shared state behind the two sides of a synchronous tee.
///
/// Invariant: `buffers[s]` holds exactly the elements pulled by the other
/// side that side `s` has not reached yet. Once a side is dropped nothing
/// more is buffered for it.
struct TeePair<I: Iterator> {
    source: I,
    buffers: [VecDeque<I::Item>; 2],
    attached: [bool; 2],
    exhausted: bool,
    pulls: usize,
}

impl<I> TeePair<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn next_for(&mut self, side: Side) -> Option<I::Item> {
        if let Some(item) = self.buffers[side.index()].pop_front() {
            return Some(item);
        }
        if self.exhausted {
            return None;
        }

        match self.source.next() {
            Some(item) => {
                self.pulls += 1;
                let other = side.other().index();
                if self.attached[other] {
                    self.buffers[other].push_back(item.clone());
                }
                Some(item)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// One side of a synchronous tee over a single-pass iterator.
pub struct TeeSide<I: Iterator> {
    pair: Rc<RefCell<TeePair<I>>>,
    side: Side,
}

/// Split a single-pass iterator into two independent sides.
///
/// Always buffers; use [`tee`](super::tee) to skip buffering for re-iterable sources.
pub fn tee_iter<I>(source: I) -> (TeeSide<I>, TeeSide<I>)
where
    I: Iterator,
    I::Item: Clone,
{
    let pair = Rc::new(RefCell::new(TeePair {
        source,
        buffers: [VecDeque::new(), VecDeque::new()],
        attached: [true, true],
        exhausted: false,
        pulls: 0,
    }));

    let left = TeeSide {
        pair: Rc::clone(&pair),
        side: Side::Left,
    };
    let right = TeeSide {
        pair,
        side: Side::Right,
    };
    (left, right)
}

impl<I: Iterator> TeeSide<I> {
    /// Which output this handle is.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of elements pulled from the shared source so far, by either side.
    pub fn source_pulls(&self) -> usize {
        self.pair.borrow().pulls
    }

    /// Elements waiting in this side's buffer.
    pub fn buffered_len(&self) -> usize {
        self.pair.borrow().buffers[self.side.index()].len()
    }
}

impl<I> Iterator for TeeSide<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pair.borrow_mut().next_for(self.side)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pair = self.pair.borrow();
        let buffered = pair.buffers[self.side.index()].len();
        if pair.exhausted {
            return (buffered, Some(buffered));
        }
        let (lower, upper) = pair.source.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> Drop for TeeSide<I> {
    fn drop(&mut self) {
        // Abandoned side: release its buffer and stop feeding it.
        if let Ok(mut pair) = self.pair.try_borrow_mut() {
            let idx = self.side.index();
            pair.attached[idx] = false;
            pair.buffers[idx].clear();
        }
    }
}

impl<I: Iterator> fmt::Debug for TeeSide<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeeSide")
            .field("side", &self.side)
            .field("buffered", &self.buffered_len())
            .field("source_pulls", &self.source_pulls())
            .finish()
    }
}
