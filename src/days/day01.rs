//! Day 1: count how often a series of depth measurements increases.

use tracing::debug;

use super::{parse_lines, Answers, SolveError, Solver};
use crate::ops::{last, scan, skip, sum, take};

/// Width of the sliding window used by the second challenge.
const WINDOW: usize = 3;

/// Sonar sweep: one depth measurement per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SonarSweep;

impl SonarSweep {
    /// Number of measurements larger than the one before.
    pub fn count_increases(depths: &[i64]) -> i64 {
        crate::pipe!(
            depths.iter().copied(),
            scan(
                |count: i64, depth: &i64, i: usize, all: &[i64]| {
                    count + i64::from(i > 0 && all[i - 1] < *depth)
                },
                0,
            ),
            last(),
        )
        .unwrap_or(0)
    }

    /// Number of sliding three-measurement windows whose sum is larger than
    /// the sum of the window one step earlier.
    pub fn count_window_increases(depths: &[i64]) -> i64 {
        crate::pipe!(
            depths.iter().copied(),
            scan(
                |count: i64, _: &i64, i: usize, all: &[i64]| {
                    if i < WINDOW {
                        return count;
                    }
                    let previous = window_sum(all, i - WINDOW);
                    let current = window_sum(all, i + 1 - WINDOW);
                    count + i64::from(previous < current)
                },
                0,
            ),
            last(),
        )
        .unwrap_or(0)
    }
}

/// Sum of the `WINDOW` measurements starting at `start`.
fn window_sum(all: &[i64], start: usize) -> i64 {
    crate::pipe!(all.iter().copied(), skip(start), take(WINDOW), sum(0))
}

impl Solver for SonarSweep {
    fn day(&self) -> u8 {
        1
    }

    fn title(&self) -> &'static str {
        "Sonar Sweep"
    }

    fn solve(&self, input: &str) -> Result<Answers, SolveError> {
        let depths = parse_lines(input, str::parse::<i64>)?;
        debug!(measurements = depths.len(), "parsed sonar sweep");

        Ok(Answers::new(
            Self::count_increases(&depths),
            Self::count_window_increases(&depths),
        ))
    }
}
