use std::fmt;

/// Running reduction with lookbehind.
///
/// Unlike a fold, the combining function also sees the element's index and
/// the complete input, so it can compare against arbitrary earlier (or later)
/// positions. The input is snapshotted up front when the scan is built, so
/// this operator must not be applied to an unbounded source.
pub struct Scan<T, R, F> {
    snapshot: Vec<T>,
    index: usize,
    acc: Option<R>,
    combine: F,
}

impl<T, R, F> Scan<T, R, F>
where
    R: Clone,
    F: FnMut(R, &T, usize, &[T]) -> R,
{
    /// Materialize `source` and prepare to fold it starting from `init`.
    pub fn new<I>(source: I, init: R, combine: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            snapshot: source.into_iter().collect(),
            index: 0,
            acc: Some(init),
            combine,
        }
    }

    /// The materialized input handed to every `combine` call.
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }
}

impl<T, R, F> Iterator for Scan<T, R, F>
where
    R: Clone,
    F: FnMut(R, &T, usize, &[T]) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = self.snapshot.get(self.index)?;
        let acc = self.acc.take()?;
        let next = (self.combine)(acc, item, self.index, &self.snapshot);
        self.index += 1;
        self.acc = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.snapshot.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl<T, R, F> ExactSizeIterator for Scan<T, R, F>
where
    R: Clone,
    F: FnMut(R, &T, usize, &[T]) -> R,
{
}

impl<T: fmt::Debug, R: fmt::Debug, F> fmt::Debug for Scan<T, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("snapshot", &self.snapshot)
            .field("index", &self.index)
            .field("acc", &self.acc)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_every_intermediate() {
        let scan = Scan::new(vec![1, 2, 3, 4], 0, |acc: i32, x: &i32, _, _: &[i32]| acc + x);
        assert_eq!(scan.collect::<Vec<_>>(), vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_combine_sees_index_and_full_snapshot() {
        let input = vec!['a', 'b', 'c'];
        let mut calls = Vec::new();
        let scan = Scan::new(input.clone(), 0usize, |acc, _: &char, i, all: &[char]| {
            calls.push((i, all.to_vec()));
            acc + 1
        });
        assert_eq!(scan.count(), 3);

        assert_eq!(calls.len(), 3);
        for (k, (i, all)) in calls.iter().enumerate() {
            assert_eq!(*i, k);
            assert_eq!(all, &input);
        }
    }

    #[test]
    fn test_snapshot_is_taken_on_construction() {
        let mut pulled = 0;
        let source = (0..5).inspect(|_| pulled += 1);
        let scan = Scan::new(source, (), |_, _: &i32, _, _: &[i32]| ());
        assert_eq!(scan.snapshot().len(), 5);
        drop(scan);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let mut scan = Scan::new(Vec::<u8>::new(), 7u8, |acc, _: &u8, _, _: &[u8]| acc);
        assert_eq!(scan.len(), 0);
        assert_eq!(scan.next(), None);
    }
}
