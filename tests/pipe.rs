use advent_pipes::numeric::{gcd, gcd_all, lcm, lcm_all, NumericError};
use advent_pipes::{map, pipe, pipe_async, sum, Pipe};

#[test]
fn pipe_applies_stages_in_order() {
    assert_eq!(pipe!(5, |x: i32| x + 1, |x: i32| x * 2), 12);
    assert_eq!(pipe!(5, |x: i32| x * 2, |x: i32| x + 1), 11);
}

#[test]
fn pipe_propagates_stage_errors_unchanged() {
    fn run() -> Result<i64, NumericError> {
        let divisor = pipe!((12, 18), |(a, b): (i64, i64)| gcd(a, b))?;
        let zero_stage = pipe!((0, 5), |(a, b): (i64, i64)| gcd(a, b))?;
        Ok(divisor + zero_stage)
    }
    assert_eq!(run(), Err(NumericError::NonPositive(0, 5)));
}

#[test]
fn pipe_combines_with_numeric_helpers() {
    let lcm_of_squares = pipe!(
        [2i64, 3, 4],
        map(|x: i64| x * x),
        |squares: advent_pipes::ops::Map<_, _>| {
            let squares: Vec<i64> = squares.collect();
            lcm_all(squares[0], &squares[1..])
        },
    );
    assert_eq!(lcm_of_squares, Ok(144));
    assert_eq!(gcd_all(12, &[18, 30]), Ok(6));
    assert_eq!(lcm(4, 6), Ok(12));
}

#[test]
fn method_pipe_chains() {
    let total = vec![1, 2, 3].pipe(sum(10));
    assert_eq!(total, 16);
}

#[tokio::test]
async fn async_pipe_awaits_each_stage() {
    let n = pipe_async!(
        "4",
        |s: &'static str| async move { s.parse::<i64>().unwrap_or(0) },
        |x: i64| async move {
            tokio::task::yield_now().await;
            x * x
        },
    );
    assert_eq!(n, 16);
}
