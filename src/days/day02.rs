//! Day 2: follow a list of submarine commands.

use std::str::FromStr;

use tracing::debug;

use super::{parse_lines, Answers, SolveError, Solver};
use crate::ops::{last, scan};

/// One steering command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move forward by the given amount.
    Forward(i64),
    /// Move down (or, with aim, tilt down) by the given amount.
    Down(i64),
    /// Move up (or, with aim, tilt up) by the given amount.
    Up(i64),
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (direction, amount) = line
            .split_once(' ')
            .ok_or_else(|| format!("expected '<direction> <amount>', got '{line}'"))?;
        let amount: i64 = amount
            .trim()
            .parse()
            .map_err(|err| format!("invalid amount '{amount}': {err}"))?;

        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Horizontal position and depth, with the aim used by the second challenge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Distance travelled forward.
    pub horizontal: i64,
    /// Depth below the surface.
    pub depth: i64,
    /// Current tilt; ignored by the direct interpretation.
    pub aim: i64,
}

impl Position {
    /// Direct interpretation: up and down change depth.
    pub fn steer(self, command: Command) -> Self {
        match command {
            Command::Forward(n) => Self {
                horizontal: self.horizontal + n,
                ..self
            },
            Command::Down(n) => Self {
                depth: self.depth + n,
                ..self
            },
            Command::Up(n) => Self {
                depth: self.depth - n,
                ..self
            },
        }
    }

    /// Aimed interpretation: up and down change aim, forward dives along it.
    pub fn steer_with_aim(self, command: Command) -> Self {
        match command {
            Command::Forward(n) => Self {
                horizontal: self.horizontal + n,
                depth: self.depth + self.aim * n,
                ..self
            },
            Command::Down(n) => Self {
                aim: self.aim + n,
                ..self
            },
            Command::Up(n) => Self {
                aim: self.aim - n,
                ..self
            },
        }
    }

    /// Puzzle answer: horizontal position times depth.
    pub fn product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

/// Dive: one command per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dive;

impl Dive {
    /// Final position after applying every command with `steer`.
    pub fn follow(commands: &[Command], steer: fn(Position, Command) -> Position) -> Position {
        crate::pipe!(
            commands.iter().copied(),
            scan(
                |at: Position, command: &Command, _: usize, _: &[Command]| steer(at, *command),
                Position::default(),
            ),
            last(),
        )
        .unwrap_or_default()
    }
}

impl Solver for Dive {
    fn day(&self) -> u8 {
        2
    }

    fn title(&self) -> &'static str {
        "Dive!"
    }

    fn solve(&self, input: &str) -> Result<Answers, SolveError> {
        let commands = parse_lines(input, Command::from_str)?;
        debug!(commands = commands.len(), "parsed dive commands");

        let direct = Self::follow(&commands, Position::steer);
        let aimed = Self::follow(&commands, Position::steer_with_aim);
        debug!(?direct, ?aimed, "final positions");

        Ok(Answers::new(direct.product(), aimed.product()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn test_parse_commands() {
        assert_eq!("forward 5".parse::<Command>(), Ok(Command::Forward(5)));
        assert_eq!("up 12".parse::<Command>(), Ok(Command::Up(12)));
        assert!("sideways 3".parse::<Command>().is_err());
        assert!("down".parse::<Command>().is_err());
        assert!("down x".parse::<Command>().is_err());
    }

    #[test]
    fn test_follow_direct() {
        let commands = parse_lines(SAMPLE, Command::from_str).unwrap();
        let end = Dive::follow(&commands, Position::steer);
        assert_eq!((end.horizontal, end.depth), (15, 10));
    }

    #[test]
    fn test_follow_with_aim() {
        let commands = parse_lines(SAMPLE, Command::from_str).unwrap();
        let end = Dive::follow(&commands, Position::steer_with_aim);
        assert_eq!((end.horizontal, end.depth, end.aim), (15, 60, 10));
    }

    #[test]
    fn test_solve_sample() {
        assert_eq!(Dive.solve(SAMPLE).unwrap(), Answers::new(150, 900));
    }

    #[test]
    fn test_no_commands_stays_at_surface() {
        assert_eq!(Dive::follow(&[], Position::steer), Position::default());
    }
}
