//! Daily puzzle solvers built on the sequence operators.
//!
//! A solver turns the raw text of one day's input into two answers. Reading
//! the file, picking the days to run and printing live in [`Runner`].

mod day01;
mod day02;
mod input;
mod registry;
mod runner;

pub use day01::SonarSweep;
pub use day02::{Command, Dive, Position};
pub use input::{input_path, load_input, parse_lines};
pub use registry::{DayInfo, DayRegistry};
pub use runner::{prompt_mode, render_answers, RunMode, Runner, RunnerConfig};

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Highest day number of a puzzle calendar.
pub const LAST_DAY: u8 = 25;

/// The two answers of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Answer to the first challenge.
    pub part_one: i64,
    /// Answer to the second challenge.
    pub part_two: i64,
}

impl Answers {
    /// Pair up two answers.
    pub fn new(part_one: i64, part_two: i64) -> Self {
        Self { part_one, part_two }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.part_one, self.part_two)
    }
}

/// A solver for one day's puzzle.
pub trait Solver {
    /// Day number, 1 through [`LAST_DAY`].
    fn day(&self) -> u8;

    /// Short puzzle title.
    fn title(&self) -> &'static str;

    /// Compute both answers from the raw input text.
    fn solve(&self, input: &str) -> Result<Answers, SolveError>;
}

/// Errors raised while loading or solving a day.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A record could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the trimmed input.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// The input held no records.
    #[error("input is empty")]
    EmptyInput,

    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Answers could not be written, or the interactive prompt failed.
    #[error("terminal I/O failed")]
    Terminal(#[from] std::io::Error),

    /// The interactive prompt reached end of input before an answer.
    #[error("prompt closed before a day was chosen")]
    PromptClosed,

    /// No solver is registered for the day.
    #[error("no solver registered for day {0}")]
    UnknownDay(u8),
}
