// Additive and subtractive processes.
//
// `SequenceEngine` drives a `ProcessState` through iterations. Each iteration:
//
// 1. computes the window for the current window length (`window.rs`),
// 2. appends `repetitions` clones of the kept region(s) to the output,
// 3. bumps the iteration counter and stops if `iteration_limit` is reached,
// 4. otherwise, with no limit, stops if the window reached the extremity,
// 5. advances the repetition and step cycles; with no limit in absolute
//    mode, a wrap of the step cycle stops the run (the next window sizes
//    would repeat ones already emitted),
// 6. moves the window by the next step value.
//
// Relative mode never needs the wrap rule: step values are positive, so the
// window grows monotonically and always reaches the extremity. The optional
// `iteration_ceiling` is a user-supplied backstop on top of these rules.
//
// The engine is pure: the input is only read, each run owns its state, and
// identical inputs and configs always produce identical output.

use tracing::{debug, info, warn};

use crate::assemble::{OutputAssembler, ProcessOutput};
use crate::config::ProcessConfig;
use crate::cycle::CyclicSequence;
use crate::direction::{Direction, ProcessKind, StepMode};
use crate::error::ConfigurationError;
use crate::state::{ProcessState, StopReason};
use crate::window::compute_window;

/// A validated additive or subtractive process, ready to run on any input.
#[derive(Debug, Clone)]
pub struct SequenceEngine {
    kind: ProcessKind,
    direction: Direction,
    step_mode: StepMode,
    step: CyclicSequence,
    repetitions: CyclicSequence,
    iteration_limit: Option<usize>,
    iteration_ceiling: Option<usize>,
}

impl SequenceEngine {
    /// Validate `config` for a process of the given kind.
    pub fn new(kind: ProcessKind, config: &ProcessConfig) -> Result<Self, ConfigurationError> {
        Ok(Self {
            kind,
            direction: config.direction,
            step_mode: config.step_mode,
            step: config.step.resolve("step")?,
            repetitions: config.repetitions.resolve("repetition")?,
            iteration_limit: config.iteration_limit,
            iteration_ceiling: config.iteration_ceiling,
        })
    }

    pub fn kind(&self) -> ProcessKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Fresh state for a new run.
    pub fn initial_state(&self) -> ProcessState {
        ProcessState::new(self.kind, self.step.clone(), self.repetitions.clone())
    }

    /// Run one iteration, appending its chunk to `out`.
    ///
    /// Calling this on a completed state is a no-op.
    pub fn step<T: Clone>(&self, state: &mut ProcessState, input: &[T], out: &mut OutputAssembler<T>) {
        if state.completed {
            return;
        }

        let window = compute_window(self.direction, self.kind, state.window_length, input.len());
        let repetitions = state.repetitions();
        let span = out.push_iteration(input, &window.kept, repetitions);
        debug!(
            iteration = state.iteration_index,
            window_length = state.window_length,
            kept = window.kept.len(),
            repetitions,
            start = span.start,
            end = span.end,
            extremity = window.extremity_reached,
            "emitted iteration"
        );

        state.iteration_index += 1;
        match self.iteration_limit {
            Some(limit) if state.iteration_index == limit => {
                state.complete(StopReason::IterationLimit);
            }
            Some(_) => {}
            None if window.extremity_reached => state.complete(StopReason::ExtremityReached),
            None => {}
        }

        let wrapped = state.advance_cycles();
        if wrapped && self.iteration_limit.is_none() && self.step_mode == StepMode::Absolute {
            state.complete(StopReason::CycleWrapped);
        }

        let ceiling_hit = self
            .iteration_ceiling
            .filter(|&ceiling| !state.completed && state.iteration_index >= ceiling);
        if let Some(ceiling) = ceiling_hit {
            warn!(
                ceiling,
                process = %self.kind,
                direction = %self.direction,
                "iteration ceiling reached before the process completed"
            );
            state.complete(StopReason::IterationCeiling);
        }

        state.apply_step(self.step_mode);
    }

    /// Run the process to completion over `input`.
    pub fn run<T: Clone>(&self, input: &[T]) -> ProcessOutput<T> {
        let mut out = OutputAssembler::new();
        if input.is_empty() {
            debug!(process = %self.kind, "empty input, nothing to emit");
            return out.finish(StopReason::EmptyInput);
        }
        if self.iteration_limit == Some(0) {
            return out.finish(StopReason::IterationLimit);
        }

        let mut state = self.initial_state();
        while !state.completed {
            self.step(&mut state, input, &mut out);
        }
        // `complete` always records a reason.
        let reason = state.stop_reason.unwrap_or(StopReason::IterationLimit);
        info!(
            process = %self.kind,
            direction = %self.direction,
            step_mode = %self.step_mode,
            iterations = out.iterations(),
            events = out.events().len(),
            reason = %reason,
            "process complete"
        );
        out.finish(reason)
    }
}

/// Grow a kept window over `input` and return the flattened iterations.
pub fn additive_process<T: Clone>(
    input: &[T],
    config: &ProcessConfig,
) -> Result<Vec<T>, ConfigurationError> {
    let engine = SequenceEngine::new(ProcessKind::Additive, config)?;
    Ok(engine.run(input).into_events())
}

/// Grow a removed window over `input` and return the flattened iterations.
pub fn subtractive_process<T: Clone>(
    input: &[T],
    config: &ProcessConfig,
) -> Result<Vec<T>, ConfigurationError> {
    let engine = SequenceEngine::new(ProcessKind::Subtractive, config)?;
    Ok(engine.run(input).into_events())
}
