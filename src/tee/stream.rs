use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll, Waker};

use futures::stream::{LocalBoxStream, Stream, StreamExt};
use futures::task::{waker, ArcWake};

use super::Side;

/// Wakers of the sides currently parked on the shared source.
///
/// The source only keeps the waker of its latest poll, so it is always
/// polled with a waker over these slots that wakes every parked side.
#[derive(Default)]
struct ParkedSides {
    slots: Mutex<[Option<Waker>; 2]>,
}

impl ParkedSides {
    fn park(&self, idx: usize, waker: &Waker) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match &slots[idx] {
            Some(parked) if parked.will_wake(waker) => {}
            _ => slots[idx] = Some(waker.clone()),
        }
    }

    fn take(&self, idx: usize) -> Option<Waker> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)[idx].take()
    }

    #[cfg(test)]
    fn is_parked(&self, idx: usize) -> bool {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)[idx].is_some()
    }
}

impl ArcWake for ParkedSides {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        let woken: Vec<Waker> = {
            let mut slots = arc_self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.iter_mut().filter_map(Option::take).collect()
        };
        woken.into_iter().for_each(Waker::wake);
    }
}

/// Shared state behind the two sides of an asynchronous tee.
///
/// Both sides are driven from one task or from tasks on a single-threaded
/// executor, so a `RefCell` is enough: polls interleave but never overlap.
struct StreamTeePair<S: Stream> {
    source: S,
    buffers: [VecDeque<S::Item>; 2],
    parked: Arc<ParkedSides>,
    source_waker: Waker,
    attached: [bool; 2],
    exhausted: bool,
    pulls: usize,
}

impl<S> StreamTeePair<S>
where
    S: Stream + Unpin,
    S::Item: Clone,
{
    fn poll_for(&mut self, side: Side, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let idx = side.index();
        if let Some(item) = self.buffers[idx].pop_front() {
            return Poll::Ready(Some(item));
        }
        if self.exhausted {
            return Poll::Ready(None);
        }

        // Parked before polling so a wake raised during the poll reaches it.
        self.parked.park(idx, cx.waker());
        let other = side.other().index();
        let mut source_cx = Context::from_waker(&self.source_waker);
        match Pin::new(&mut self.source).poll_next(&mut source_cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(item)) => {
                self.parked.take(idx);
                self.pulls += 1;
                if self.attached[other] {
                    self.buffers[other].push_back(item.clone());
                    self.wake(other);
                }
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                self.parked.take(idx);
                self.exhausted = true;
                self.wake(other);
                Poll::Ready(None)
            }
        }
    }

    /// Wake a side parked on the source; its next poll finds the buffer or the end.
    fn wake(&self, idx: usize) {
        if let Some(parked) = self.parked.take(idx) {
            parked.wake();
        }
    }
}

/// One side of an asynchronous tee.
pub struct StreamTeeSide<S: Stream> {
    pair: Rc<RefCell<StreamTeePair<S>>>,
    side: Side,
}

/// Split a stream into two independently polled streams.
///
/// A side suspends only while the shared source is pending; buffered
/// elements are returned without suspending.
pub fn tee_stream<S>(source: S) -> (StreamTeeSide<S>, StreamTeeSide<S>)
where
    S: Stream + Unpin,
    S::Item: Clone,
{
    let parked = Arc::new(ParkedSides::default());
    let pair = Rc::new(RefCell::new(StreamTeePair {
        source,
        buffers: [VecDeque::new(), VecDeque::new()],
        source_waker: waker(Arc::clone(&parked)),
        parked,
        attached: [true, true],
        exhausted: false,
        pulls: 0,
    }));

    let left = StreamTeeSide {
        pair: Rc::clone(&pair),
        side: Side::Left,
    };
    let right = StreamTeeSide {
        pair,
        side: Side::Right,
    };
    (left, right)
}

/// Split a stream into `n` independent streams by chaining pairwise tees.
///
/// Each step splits one more copy off the remainder, so buffering grows with
/// `n`; fine for the handful of copies a pipeline needs. `n == 0` drops the
/// source and returns no streams.
pub fn tee_stream_n<'a, S>(source: S, n: usize) -> Vec<LocalBoxStream<'a, S::Item>>
where
    S: Stream + 'a,
    S::Item: Clone + 'a,
{
    let mut outputs = Vec::with_capacity(n);
    if n == 0 {
        return outputs;
    }

    let mut rest = source.boxed_local();
    for _ in 1..n {
        let (orig, copy) = tee_stream(rest);
        outputs.push(copy.boxed_local());
        rest = orig.boxed_local();
    }
    outputs.push(rest);
    outputs
}

impl<S: Stream> StreamTeeSide<S> {
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

impl<S> Stream for StreamTeeSide<S>
where
    S: Stream + Unpin,
    S::Item: Clone,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut pair = self.pair.borrow_mut();
        pair.poll_for(self.side, cx)
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

impl<S: Stream> Drop for StreamTeeSide<S> {
    fn drop(&mut self) {
        if let Ok(mut pair) = self.pair.try_borrow_mut() {
            let idx = self.side.index();
            pair.attached[idx] = false;
            pair.buffers[idx].clear();
            pair.parked.take(idx);
        }
    }
}

impl<S: Stream> fmt::Debug for StreamTeeSide<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTeeSide")
            .field("side", &self.side)
            .field("buffered", &self.buffered_len())
            .field("source_pulls", &self.source_pulls())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::stream;
    use futures::task::noop_waker;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct WakeCount(AtomicUsize);

    impl ArcWake for WakeCount {
        fn wake_by_ref(arc_self: &Arc<Self>) {
            arc_self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_waker() -> (Arc<WakeCount>, Waker) {
        let count = Arc::new(WakeCount::default());
        let w = waker(Arc::clone(&count));
        (count, w)
    }

    #[test]
    fn test_sides_collect_same_elements() {
        let (left, right) = tee_stream(stream::iter(vec![1, 2, 3]));
        let (a, b) = block_on(async {
            let a = left.collect::<Vec<_>>().await;
            let b = right.collect::<Vec<_>>().await;
            (a, b)
        });
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![1, 2, 3]);
    }

    #[test]
    fn test_buffered_pop_does_not_touch_source() {
        let (mut left, mut right) = tee_stream(stream::iter(0..4));
        block_on(async {
            assert_eq!(left.next().await, Some(0));
            assert_eq!(left.next().await, Some(1));
            assert_eq!(right.buffered_len(), 2);
            assert_eq!(right.next().await, Some(0));
            assert_eq!(right.source_pulls(), 2);
        });
    }

    #[test]
    fn test_pending_side_is_woken_by_other_side() {
        let (tx, rx) = mpsc::unbounded::<u32>();
        let (mut left, mut right) = tee_stream(rx);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(Pin::new(&mut left).poll_next(&mut cx).is_pending());
        assert!(left.pair.borrow().parked.is_parked(0));

        tx.unbounded_send(9).unwrap();
        assert_eq!(Pin::new(&mut right).poll_next(&mut cx), Poll::Ready(Some(9)));
        // Delivering into the left buffer consumed the parked waker.
        assert!(!left.pair.borrow().parked.is_parked(0));
        assert_eq!(Pin::new(&mut left).poll_next(&mut cx), Poll::Ready(Some(9)));

        drop(tx);
        assert_eq!(Pin::new(&mut left).poll_next(&mut cx), Poll::Ready(None));
        assert_eq!(Pin::new(&mut right).poll_next(&mut cx), Poll::Ready(None));
    }

    #[test]
    fn test_parked_side_is_woken_after_other_side_detaches() {
        let (tx, rx) = mpsc::unbounded::<u32>();
        let (mut left, mut right) = tee_stream(rx);

        let (left_wakes, left_waker) = counting_waker();
        let (right_wakes, right_waker) = counting_waker();
        let mut left_cx = Context::from_waker(&left_waker);
        let mut right_cx = Context::from_waker(&right_waker);
        assert!(Pin::new(&mut left).poll_next(&mut left_cx).is_pending());
        assert!(Pin::new(&mut right).poll_next(&mut right_cx).is_pending());

        drop(right);
        tx.unbounded_send(1).unwrap();

        assert_eq!(left_wakes.0.load(Ordering::SeqCst), 1);
        assert_eq!(right_wakes.0.load(Ordering::SeqCst), 0);
        assert_eq!(Pin::new(&mut left).poll_next(&mut left_cx), Poll::Ready(Some(1)));
    }

    #[test]
    fn test_both_parked_sides_are_woken() {
        let (tx, rx) = mpsc::unbounded::<u32>();
        let (mut left, mut right) = tee_stream(rx);

        let (left_wakes, left_waker) = counting_waker();
        let (right_wakes, right_waker) = counting_waker();
        assert!(Pin::new(&mut left).poll_next(&mut Context::from_waker(&left_waker)).is_pending());
        assert!(Pin::new(&mut right).poll_next(&mut Context::from_waker(&right_waker)).is_pending());

        tx.unbounded_send(4).unwrap();
        assert_eq!(left_wakes.0.load(Ordering::SeqCst), 1);
        assert_eq!(right_wakes.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tee_n_yields_n_copies() {
        let copies = tee_stream_n(stream::iter(vec!['a', 'b', 'c']), 3);
        assert_eq!(copies.len(), 3);
        let collected: Vec<String> = block_on(async {
            let mut out = Vec::new();
            for copy in copies {
                out.push(copy.collect::<String>().await);
            }
            out
        });
        assert_eq!(collected, vec!["abc", "abc", "abc"]);
    }

    #[test]
    fn test_tee_n_edge_counts() {
        assert!(tee_stream_n(stream::iter(0..3), 0).is_empty());
        let single = tee_stream_n(stream::iter(0..3), 1);
        assert_eq!(block_on(single.into_iter().next().unwrap().collect::<Vec<_>>()), vec![0, 1, 2]);
    }
}
