//! Left-to-right composition.
//!
//! `pipe!(x, f, g, h)` is `h(g(f(x)))`, written in the order the stages run.
//! Each stage is any expression callable with one argument: closures,
//! function items, or the curried operators in [`ops`](crate::ops).
//! `pipe!` adds no error handling; a panic or an early `?` inside a stage
//! leaves the pipeline exactly as it would leave a nested call.

/// Apply unary stages to a value, left to right.
///
/// The value is evaluated first, then every stage is applied to the result of
/// the previous one.
///
/// ```
/// use advent_pipes::pipe;
///
/// let twelve = pipe!(5, |x| x + 1, |x| x * 2);
/// assert_eq!(twelve, 12);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $stage:expr $(, $rest:expr)* $(,)?) => {{
        let value = $value;
        $crate::pipe!(($stage)(value) $(, $rest)*)
    }};
}

/// Apply asynchronous unary stages to a value, left to right.
///
/// Every stage returns a future; stage `k + 1` is not called until the future
/// returned by stage `k` has resolved. Must be used inside an `async` context.
///
/// ```
/// use advent_pipes::pipe_async;
///
/// # futures::executor::block_on(async {
/// let n = pipe_async!(3, |x| async move { x * 10 }, |x| async move { x + 1 });
/// assert_eq!(n, 31);
/// # });
/// ```
#[macro_export]
macro_rules! pipe_async {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $stage:expr $(, $rest:expr)* $(,)?) => {{
        let value = $value;
        let value = ($stage)(value).await;
        $crate::pipe_async!(value $(, $rest)*)
    }};
}

/// Method form of a single pipe stage: `x.pipe(f)` is `f(x)`.
pub trait Pipe: Sized {
    /// Feed `self` into `stage`.
    fn pipe<R, F>(self, stage: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        stage(self)
    }
}

impl<T> Pipe for T {}
