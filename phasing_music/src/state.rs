// Mutable per-run state of an additive or subtractive process.
//
// A `ProcessState` is created by `SequenceEngine::initial_state`, mutated
// exactly once per iteration by `SequenceEngine::step`, and dropped when the
// run ends. Every counter is an explicit field so a run can be paused and
// inspected between iterations.
//
// Additive runs start with the first step value already applied
// (`window_length = step[0]`). Subtractive runs start from an empty removal
// window (`window_length = 0`) with the step cursor *pending*: the first
// advance applies `step[0]` without moving the cursor, after which both kinds
// progress identically.

use std::fmt;

use crate::cycle::CyclicSequence;
use crate::direction::{ProcessKind, StepMode};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input was empty; nothing was emitted.
    EmptyInput,
    /// The caller's `iteration_limit` was reached.
    IterationLimit,
    /// No limit was given and the window reached the extremity.
    ExtremityReached,
    /// No limit was given, the step mode is absolute, and the step cycle
    /// wrapped around; continuing would revisit window sizes already emitted.
    CycleWrapped,
    /// The optional hard ceiling cut the run short.
    IterationCeiling,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::EmptyInput => "empty input",
            StopReason::IterationLimit => "iteration limit reached",
            StopReason::ExtremityReached => "extremity reached",
            StopReason::CycleWrapped => "absolute step cycle wrapped",
            StopReason::IterationCeiling => "iteration ceiling reached",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// Number of iterations emitted so far.
    pub iteration_index: usize,
    /// Length of the additive kept window or subtractive removed window.
    pub window_length: usize,
    pub completed: bool,
    pub stop_reason: Option<StopReason>,
    step: CyclicSequence,
    repetitions: CyclicSequence,
    step_pending: bool,
}

impl ProcessState {
    pub fn new(kind: ProcessKind, step: CyclicSequence, repetitions: CyclicSequence) -> Self {
        let (window_length, step_pending) = match kind {
            ProcessKind::Additive => (step.current(), false),
            ProcessKind::Subtractive => (0, true),
        };
        Self {
            iteration_index: 0,
            window_length,
            completed: false,
            stop_reason: None,
            step,
            repetitions,
            step_pending,
        }
    }

    pub fn step_cycle_index(&self) -> usize {
        self.step.index()
    }

    pub fn repetition_cycle_index(&self) -> usize {
        self.repetitions.index()
    }

    /// How many times the current iteration's slice is repeated.
    pub fn repetitions(&self) -> usize {
        self.repetitions.current()
    }

    /// Mark the run complete. The first reason recorded wins.
    pub fn complete(&mut self, reason: StopReason) {
        if !self.completed {
            self.completed = true;
            self.stop_reason = Some(reason);
        }
    }

    /// Advance the repetition and step cursors. Returns `true` if the step
    /// cursor wrapped back to its first value.
    pub fn advance_cycles(&mut self) -> bool {
        self.repetitions.advance();
        if self.step_pending {
            self.step_pending = false;
            false
        } else {
            self.step.advance()
        }
    }

    /// Move the window by the step value under the cursor.
    pub fn apply_step(&mut self, mode: StepMode) {
        self.window_length = mode.apply(self.window_length, self.step.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(values: &[i64]) -> CyclicSequence {
        CyclicSequence::new("test", values).unwrap()
    }

    #[test]
    fn additive_starts_with_first_step_applied() {
        let state = ProcessState::new(ProcessKind::Additive, cycle(&[3, 5]), cycle(&[1]));
        assert_eq!(state.window_length, 3);
        assert_eq!(state.iteration_index, 0);
        assert_eq!(state.step_cycle_index(), 0);
        assert!(!state.completed);
    }

    #[test]
    fn subtractive_applies_first_step_without_moving_cursor() {
        let mut state = ProcessState::new(ProcessKind::Subtractive, cycle(&[3, 5]), cycle(&[1]));
        assert_eq!(state.window_length, 0);

        assert!(!state.advance_cycles());
        state.apply_step(StepMode::Relative);
        assert_eq!(state.step_cycle_index(), 0);
        assert_eq!(state.window_length, 3);

        assert!(!state.advance_cycles());
        state.apply_step(StepMode::Relative);
        assert_eq!(state.step_cycle_index(), 1);
        assert_eq!(state.window_length, 8);

        assert!(state.advance_cycles());
        state.apply_step(StepMode::Absolute);
        assert_eq!(state.window_length, 3);
    }

    #[test]
    fn repetition_cursor_advances_independently() {
        let mut state = ProcessState::new(ProcessKind::Additive, cycle(&[1]), cycle(&[1, 2, 3]));
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(state.repetitions());
            state.advance_cycles();
        }
        assert_eq!(seen, vec![1, 2, 3, 1, 2]);
        assert_eq!(state.repetition_cycle_index(), 2);
    }

    #[test]
    fn first_completion_reason_is_kept() {
        let mut state = ProcessState::new(ProcessKind::Additive, cycle(&[1]), cycle(&[1]));
        state.complete(StopReason::IterationLimit);
        state.complete(StopReason::CycleWrapped);
        assert!(state.completed);
        assert_eq!(state.stop_reason, Some(StopReason::IterationLimit));
    }
}
