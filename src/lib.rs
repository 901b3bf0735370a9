//! # Lazy Sequence Pipelines
//!
//! A small library of pull-based sequence operators, built so that daily
//! puzzle solutions read as a short left-to-right pipeline over their input.
//!
//! ## Core Pieces
//!
//! 1. **Sequence adapter**: [`Sequence`] tags a source as re-iterable
//!    (a container, each traversal starts fresh) or single-pass (a cursor
//!    whose state is destructively advanced)
//! 2. **Tee**: [`tee`] splits one single-pass source into two sides that
//!    advance independently, buffering only the distance between them;
//!    [`tee_stream`] does the same for asynchronous streams
//! 3. **Operators**: lazy [`map`], [`take`], [`skip`], [`split_at`],
//!    [`skip_while`], [`take_while`], [`repeat`], the snapshotting [`scan`],
//!    and the terminal [`sum`] and [`last`]
//! 4. **Pipe**: [`pipe!`] applies unary stages in strict left-to-right order
//!
//! ## Usage Example
//!
//! ```
//! use advent_pipes::{last, pipe, scan};
//!
//! let depths = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];
//! let increases = pipe!(
//!     depths,
//!     scan(
//!         |count: u32, depth: &i32, i: usize, all: &[i32]| {
//!             count + u32::from(i > 0 && all[i - 1] < *depth)
//!         },
//!         0,
//!     ),
//!     last(),
//! );
//! assert_eq!(increases, Some(7));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod seq;      // Re-iterable vs single-pass sources
pub mod tee;      // Iterator and stream duplication
pub mod ops;      // Lazy and terminal operators
pub mod pipe;     // Left-to-right composition
pub mod numeric;  // gcd / lcm and friends
pub mod util;     // Collection helpers
pub mod days;     // Daily puzzle solvers and runner

// Re-exports for convenience
pub use seq::{Sequence, Traversal};
pub use tee::{tee, tee_iter, tee_stream, tee_stream_n, StreamTeeSide, TeeSide};
pub use ops::{
    last, map, repeat, repeat_n, scan, skip, skip_while, split_at, sum, take, take_while,
    SeqExt,
};
pub use pipe::Pipe;
pub use numeric::{gcd, lcm, NumericError};
pub use days::{Answers, DayRegistry, RunMode, Runner, RunnerConfig, SolveError, Solver};
