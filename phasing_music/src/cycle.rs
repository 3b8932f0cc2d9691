// Cyclic numeric sequences: the step and repetition progressions.
//
// A `CyclicSequence` is a fixed, non-empty list of positive integers plus an
// explicit cursor. Processes read `current()` and call `advance()` once per
// iteration; `advance()` wraps the cursor back to 0 after the last value and
// reports that it did, which the engine uses for its absolute-mode
// termination rule (see `engine.rs`).
//
// The cursor is a plain integer field rather than an iterator so the state of
// a run can be inspected (and asserted on) between iterations.

use crate::error::ConfigurationError;

/// A non-empty list of positive integers consumed cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicSequence {
    values: Vec<usize>,
    index: usize,
}

impl CyclicSequence {
    /// Validate `values` and build a sequence positioned at its first value.
    ///
    /// `cycle` names the sequence ("step", "repetition", ...) in error
    /// messages.
    pub fn new(cycle: &'static str, values: &[i64]) -> Result<Self, ConfigurationError> {
        if values.is_empty() {
            return Err(ConfigurationError::EmptyCycle { cycle });
        }
        let values = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                usize::try_from(value)
                    .ok()
                    .filter(|&v| v > 0)
                    .ok_or(ConfigurationError::NonPositiveValue {
                        cycle,
                        index,
                        value,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values, index: 0 })
    }

    /// The value under the cursor.
    pub fn current(&self) -> usize {
        self.values[self.index]
    }

    /// Move the cursor to the next value. Returns `true` if it wrapped to 0.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        if self.index >= self.values.len() {
            self.index = 0;
            true
        } else {
            false
        }
    }

    /// Current cursor position; always a valid index into `values()`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
