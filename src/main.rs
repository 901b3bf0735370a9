use std::io::Write;
use std::path::PathBuf;

use advent_pipes::days::{prompt_mode, LAST_DAY};
use advent_pipes::{DayRegistry, RunMode, Runner, RunnerConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "advent-pipes", about = "Solve daily puzzles with lazy sequence pipelines")]
struct Cli {
    /// Day to run (1-25). Asked interactively when neither a day nor --all is given.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=LAST_DAY as i64), conflicts_with = "all")]
    day: Option<u8>,

    /// Run every registered day, skipping days that fail.
    #[arg(long)]
    all: bool,

    /// Directory holding the day inputs (`01.txt`, `02.txt`, ...).
    #[arg(long, env = "ADVENT_INPUTS", default_value = "inputs")]
    inputs: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mode = match (cli.all, cli.day) {
        (true, _) => RunMode::All,
        (false, Some(day)) => RunMode::Day(day),
        (false, None) => {
            let mut stdin = BufReader::new(tokio::io::stdin());
            prompt_mode(&mut stdin, &mut std::io::stderr())
                .await
                .context("failed to read the day selection")?
        }
    };

    let config = RunnerConfig::new(cli.inputs, mode);
    let runner = Runner::new(DayRegistry::with_defaults(), config);

    let mut stdout = std::io::stdout();
    runner.run(&mut stdout).await.with_context(|| match mode {
        RunMode::Day(day) => format!(
            "day {} failed (inputs in {})",
            day,
            runner.config().inputs_dir.display()
        ),
        RunMode::All => "batch run failed".to_string(),
    })?;
    stdout.flush()?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("advent_pipes=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
