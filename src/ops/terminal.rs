use std::ops::Add;

/// Force a full traversal and add every element onto `initial`.
pub fn sum_from<I, T>(xs: I, initial: T) -> T
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T>,
{
    let mut total = initial;
    for x in xs {
        total = total + x;
    }
    total
}

/// Force a full traversal and keep the final element; `None` when empty.
pub fn last_of<I: IntoIterator>(xs: I) -> Option<I::Item> {
    let mut last = None;
    for x in xs {
        last = Some(x);
    }
    last
}
