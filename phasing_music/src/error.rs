// Configuration errors for the minimalist processes.
//
// Every error here is detected eagerly, before a process emits its first
// iteration: a run either completes fully or fails without producing output.
// Empty input is not an error (it yields an empty output), and possible
// non-termination is handled by `iteration_limit` / `iteration_ceiling`
// rather than reported.

use thiserror::Error;

use crate::direction::Direction;

/// Invalid process configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{cycle} sequence is empty")]
    EmptyCycle { cycle: &'static str },

    #[error("{cycle} sequence value at index {index} must be positive, got {value}")]
    NonPositiveValue {
        cycle: &'static str,
        index: usize,
        value: i64,
    },

    #[error("unknown direction `{0}` (expected forward, backward, inward or outward)")]
    UnknownDirection(String),

    #[error("unknown step mode `{0}` (expected relative or absolute)")]
    UnknownStepMode(String),

    #[error("{cycle} progression length {length} exceeds the maximum of {max}")]
    ProgressionTooLong {
        cycle: &'static str,
        length: usize,
        max: usize,
    },

    #[error("unknown progression `{0}`")]
    UnknownProgression(String),

    #[error("invalid {cycle} specification `{text}`")]
    InvalidCycleSpec { cycle: &'static str, text: String },

    #[error("scanning window size must be positive")]
    ZeroWindowSize,

    #[error("scanning does not support the {0:?} direction")]
    UnsupportedScanDirection(Direction),

    #[error("cannot parse note `{0}`")]
    InvalidNote(String),
}
