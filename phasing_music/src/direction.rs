// Closed enumerations that select how a process walks its input.
//
// `Direction` picks where the window grows from, `StepMode` picks how the
// step progression moves the window, and `ProcessKind` distinguishes a kept
// window (additive) from a removed one (subtractive). All three are fixed for
// the lifetime of a run and are dispatched by exhaustive `match` in
// `window.rs` and `engine.rs`.
//
// Text forms are lowercase (`"forward"`, `"absolute"`, ...) both for serde and
// for `FromStr`, which additionally accepts any letter case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Where the window grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// From the start of the sequence towards the end.
    #[default]
    Forward,
    /// From the end of the sequence towards the start.
    Backward,
    /// From both extremities towards the middle.
    Inward,
    /// From the middle towards both extremities.
    Outward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Inward,
        Direction::Outward,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| ConfigurationError::UnknownDirection(s.to_string()))
    }
}

/// How each step value changes the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// The step value is added to the running window length.
    #[default]
    Relative,
    /// The step value replaces the window length outright.
    Absolute,
}

impl StepMode {
    pub fn name(self) -> &'static str {
        match self {
            StepMode::Relative => "relative",
            StepMode::Absolute => "absolute",
        }
    }

    /// Apply one step value to the current window length (or scan position).
    pub fn apply(self, current: usize, step: usize) -> usize {
        match self {
            StepMode::Relative => current.saturating_add(step),
            StepMode::Absolute => step,
        }
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StepMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relative" => Ok(StepMode::Relative),
            "absolute" => Ok(StepMode::Absolute),
            _ => Err(ConfigurationError::UnknownStepMode(s.to_string())),
        }
    }
}

/// Whether the window is the part that is kept or the part that is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    Additive,
    Subtractive,
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessKind::Additive => f.write_str("additive"),
            ProcessKind::Subtractive => f.write_str("subtractive"),
        }
    }
}
