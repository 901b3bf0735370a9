use std::collections::BTreeMap;
use std::fmt;

use super::{Dive, SolveError, Solver, SonarSweep};

/// Metadata describing a registered day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    /// Day number.
    pub day: u8,
    /// Puzzle title.
    pub title: &'static str,
}

/// Registry of available solvers, ordered by day.
#[derive(Default)]
pub struct DayRegistry {
    solvers: BTreeMap<u8, Box<dyn Solver>>,
}

impl DayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Registry holding every solver shipped with the crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SonarSweep);
        registry.register(Dive);
        registry
    }

    /// Register a solver under its day, replacing any earlier one.
    pub fn register<S>(&mut self, solver: S)
    where
        S: Solver + 'static,
    {
        self.solvers.insert(solver.day(), Box::new(solver));
    }

    /// Solver for `day`.
    pub fn get(&self, day: u8) -> Result<&dyn Solver, SolveError> {
        self.solvers
            .get(&day)
            .map(|solver| solver.as_ref())
            .ok_or(SolveError::UnknownDay(day))
    }

    /// Registered day numbers in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.solvers.keys().copied()
    }

    /// List all registered days.
    pub fn list(&self) -> Vec<DayInfo> {
        self.solvers
            .iter()
            .map(|(&day, solver)| DayInfo {
                day,
                title: solver.title(),
            })
            .collect()
    }
}

impl fmt::Debug for DayRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayRegistry")
            .field("days", &self.solvers.keys().collect::<Vec<_>>())
            .finish()
    }
}
