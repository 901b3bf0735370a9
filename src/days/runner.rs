use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use super::{load_input, Answers, DayRegistry, SolveError, LAST_DAY};

/// Which days to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Every registered day, skipping the ones that fail.
    All,
    /// A single day; its failure is returned to the caller.
    Day(u8),
}

/// Settings for a [`Runner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Directory holding `01.txt`, `02.txt`, ...
    pub inputs_dir: PathBuf,
    /// Days to run.
    pub mode: RunMode,
}

impl RunnerConfig {
    /// Create a configuration.
    pub fn new(inputs_dir: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            inputs_dir: inputs_dir.into(),
            mode,
        }
    }
}

/// Loads inputs, runs solvers and writes their answers.
#[derive(Debug)]
pub struct Runner {
    registry: DayRegistry,
    config: RunnerConfig,
}

impl Runner {
    /// Create a runner over `registry`.
    pub fn new(registry: DayRegistry, config: RunnerConfig) -> Self {
        Self { registry, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Load the input of `day` and solve it.
    pub async fn solve_day(&self, day: u8) -> Result<Answers, SolveError> {
        let solver = self.registry.get(day)?;
        let input = load_input(&self.config.inputs_dir, day).await?;
        debug!(day, title = solver.title(), bytes = input.len(), "solving");
        solver.solve(&input)
    }

    /// Run the configured days, writing answers to `out`.
    ///
    /// Returns the number of days solved. In [`RunMode::All`] a failing day is
    /// logged and skipped; in [`RunMode::Day`] the failure is returned.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, SolveError> {
        match self.config.mode {
            RunMode::Day(day) => {
                let answers = self.solve_day(day).await?;
                out.write_all(render_answers(day, &answers).as_bytes())?;
                Ok(1)
            }
            RunMode::All => {
                let mut solved = 0;
                for day in self.registry.days() {
                    match self.solve_day(day).await {
                        Ok(answers) => {
                            out.write_all(render_answers(day, &answers).as_bytes())?;
                            solved += 1;
                        }
                        Err(err) => warn!(day, error = %err, "skipping day"),
                    }
                }
                info!(solved, "finished batch run");
                Ok(solved)
            }
        }
    }
}

/// Text block printed for one day.
pub fn render_answers(day: u8, answers: &Answers) -> String {
    format!(
        "Answers for day {}:\n  {}\n  {}\n",
        day, answers.part_one, answers.part_two
    )
}

/// Ask on `input` whether to run every day or which single day to run.
///
/// Prompts go to `output`. A day outside `1..=25` or a non-number is asked
/// for again.
pub async fn prompt_mode<R, W>(input: &mut R, output: &mut W) -> Result<RunMode, SolveError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = String::new();

    write!(output, "Do you want to run all days? [y/N] ")?;
    output.flush()?;
    if input.read_line(&mut line).await? == 0 {
        return Err(SolveError::PromptClosed);
    }
    if matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        return Ok(RunMode::All);
    }

    loop {
        write!(output, "What day would you like to run? ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Err(SolveError::PromptClosed);
        }

        match line.trim().parse::<u8>() {
            Ok(day) if (1..=LAST_DAY).contains(&day) => return Ok(RunMode::Day(day)),
            _ => writeln!(output, "Please enter a day between 1 and {LAST_DAY}.")?,
        }
    }
}
