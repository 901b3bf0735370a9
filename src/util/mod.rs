//! Collection helpers

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Remove and return the first element matching `predicate`.
pub fn find_and_remove<T, F>(items: &mut Vec<T>, predicate: F) -> Option<T>
where
    F: FnMut(&T) -> bool,
{
    let idx = items.iter().position(predicate)?;
    Some(items.remove(idx))
}

/// Whether a slice has any elements.
pub fn not_empty<T>(items: &[T]) -> bool {
    !items.is_empty()
}

/// Containers answering membership queries.
pub trait SetLike<T> {
    /// Whether `item` is a member.
    fn has(&self, item: &T) -> bool;
}

impl<T: Eq + Hash, S: BuildHasher> SetLike<T> for HashSet<T, S> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq> SetLike<T> for [T] {
    fn has(&self, item: &T) -> bool {
        self.contains(item)
    }
}

/// Predicate: `item` is a member of `set`.
pub fn is_in<'a, T, S>(set: &'a S) -> impl Fn(&T) -> bool + 'a
where
    S: SetLike<T> + ?Sized,
{
    move |item| set.has(item)
}

/// Predicate: `item` is not a member of `set`.
pub fn not_in<'a, T, S>(set: &'a S) -> impl Fn(&T) -> bool + 'a
where
    S: SetLike<T> + ?Sized,
{
    move |item| !set.has(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_remove() {
        let mut items = vec![1, 4, 6, 9];
        assert_eq!(find_and_remove(&mut items, |x| x % 2 == 0), Some(4));
        assert_eq!(items, vec![1, 6, 9]);
        assert_eq!(find_and_remove(&mut items, |x| *x > 100), None);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_membership_predicates() {
        let seen: HashSet<char> = "abc".chars().collect();
        let fresh: String = "abxcy".chars().filter(not_in(&seen)).collect();
        assert_eq!(fresh, "xy");

        let allowed = BTreeSet::from([1, 2]);
        assert!(is_in(&allowed)(&2));
        assert!(!is_in(&allowed)(&3));

        let slice: &[u8] = &[7, 8];
        assert!(is_in(slice)(&8));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty(&[0]));
        assert!(!not_empty::<u8>(&[]));
    }
}
