// Process configuration.
//
// `ProcessConfig` carries every knob of the additive and subtractive
// processes (plus the scanning window size), loaded from JSON or assembled
// from CLI flags in `main.rs`. All fields have defaults, so a config file only
// needs to name what it changes:
//
//   { "direction": "inward", "step": [1, 2, 3], "iteration_limit": 12 }
//
// Step and repetition values are described by a `CycleSpec`: a single
// integer, an explicit list, or a named progression from
// `phasing_progression` with a length. Specs hold raw `i64` values so that
// zero or negative entries surface as `ConfigurationError`s at resolve time
// rather than as opaque deserialization failures.
//
// Defaults are built fresh by `Default::default()` on every call; nothing is
// shared between configs.

use std::path::Path;

use phasing_progression::ProgressionKind;
use serde::{Deserialize, Serialize};

use crate::cycle::CyclicSequence;
use crate::direction::{Direction, StepMode};
use crate::error::ConfigurationError;

/// Longest named progression a `CycleSpec` may request.
pub const MAX_PROGRESSION_LENGTH: usize = 4096;

/// Source of a cyclic step or repetition sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CycleSpec {
    Single(i64),
    List(Vec<i64>),
    Named {
        progression: ProgressionKind,
        length: usize,
    },
}

impl CycleSpec {
    /// Validate and materialize the sequence. `cycle` names it in errors.
    pub fn resolve(&self, cycle: &'static str) -> Result<CyclicSequence, ConfigurationError> {
        match self {
            CycleSpec::Single(value) => CyclicSequence::new(cycle, &[*value]),
            CycleSpec::List(values) => CyclicSequence::new(cycle, values),
            CycleSpec::Named {
                progression,
                length,
            } => {
                if *length > MAX_PROGRESSION_LENGTH {
                    return Err(ConfigurationError::ProgressionTooLong {
                        cycle,
                        length: *length,
                        max: MAX_PROGRESSION_LENGTH,
                    });
                }
                let values: Vec<i64> = progression
                    .generate(*length)
                    .into_iter()
                    .map(i64::from)
                    .collect();
                CyclicSequence::new(cycle, &values)
            }
        }
    }

    /// Parse the CLI text forms: `3`, `1,2,3` or `primes:8`.
    pub fn parse(cycle: &'static str, text: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidCycleSpec {
            cycle,
            text: text.to_string(),
        };
        let text = text.trim();
        if let Some((name, length)) = text.split_once(':') {
            let progression = ProgressionKind::from_name(name)
                .ok_or_else(|| ConfigurationError::UnknownProgression(name.trim().to_string()))?;
            let length = length.trim().parse().map_err(|_| invalid())?;
            return Ok(CycleSpec::Named {
                progression,
                length,
            });
        }
        let values = text
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        if let [single] = values[..] {
            return Ok(CycleSpec::Single(single));
        }
        Ok(CycleSpec::List(values))
    }
}

impl From<i64> for CycleSpec {
    fn from(value: i64) -> Self {
        CycleSpec::Single(value)
    }
}

impl From<Vec<i64>> for CycleSpec {
    fn from(values: Vec<i64>) -> Self {
        CycleSpec::List(values)
    }
}

/// Configuration for additive, subtractive and (via `scan_config`) scanning
/// processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    pub direction: Direction,
    /// Step progression; default `1`.
    pub step: CycleSpec,
    pub step_mode: StepMode,
    /// Repetitions per iteration; default `1`.
    pub repetitions: CycleSpec,
    /// Stop after exactly this many iterations. When unset the run stops on
    /// its own (extremity reached, or absolute step cycle wrapped).
    pub iteration_limit: Option<usize>,
    /// Hard safety ceiling on iterations, applied only when the run has not
    /// otherwise completed. Unset by default.
    pub iteration_ceiling: Option<usize>,
    /// Scanning window size; ignored by additive and subtractive processes.
    pub window_size: usize,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            direction: Direction::Forward,
            step: CycleSpec::Single(1),
            step_mode: StepMode::Relative,
            repetitions: CycleSpec::Single(1),
            iteration_limit: None,
            iteration_ceiling: None,
            window_size: 2,
        }
    }
}

impl ProcessConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let config: ProcessConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// The subset of this config understood by the scanning process.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            direction: self.direction,
            step: self.step.clone(),
            step_mode: self.step_mode,
            window_size: self.window_size,
        }
    }
}

/// Configuration for the scanning process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Only `Forward` and `Backward` are supported.
    pub direction: Direction,
    /// Progression moving the window's start position; default `1`.
    pub step: CycleSpec,
    pub step_mode: StepMode,
    pub window_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ProcessConfig::default().scan_config()
    }
}
