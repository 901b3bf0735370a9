use std::fmt::Display;
use std::path::{Path, PathBuf};

use super::SolveError;
use crate::ops::map;

/// `<dir>/<dd>.txt`, the input file of `day`.
pub fn input_path(dir: &Path, day: u8) -> PathBuf {
    dir.join(format!("{day:02}.txt"))
}

/// Read one day's input as UTF-8 text.
pub async fn load_input(dir: &Path, day: u8) -> Result<String, SolveError> {
    let path = input_path(dir, day);
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok(text),
        Err(source) => Err(SolveError::Io { path, source }),
    }
}

/// Trim `input`, split it into lines and parse each line with `parse`.
///
/// The first failing line aborts parsing; its 1-based number is reported.
pub fn parse_lines<T, E, F>(input: &str, mut parse: F) -> Result<Vec<T>, SolveError>
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SolveError::EmptyInput);
    }

    crate::pipe!(
        trimmed.lines().enumerate(),
        map(|(idx, line): (usize, &str)| {
            parse(line.trim()).map_err(|err| SolveError::Parse {
                line: idx + 1,
                message: err.to_string(),
            })
        }),
    )
    .collect()
}
