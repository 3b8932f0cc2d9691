// Output assembly.
//
// Each iteration's kept slice(s) are cloned into one flat output vector:
// iteration order first, then repetition order, then position order. Every
// emitted element is an independent clone, so downstream code may rewrite an
// emitted copy (a new duration, say) without touching the input or any other
// copy of the same input element.
//
// Alongside the flat events the assembler records one span per iteration so
// callers and tests can see the iteration structure without re-deriving it.

use std::ops::Range;

use crate::state::StopReason;
use crate::window::Bands;

pub struct OutputAssembler<T> {
    events: Vec<T>,
    spans: Vec<Range<usize>>,
}

impl<T> Default for OutputAssembler<T> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl<T: Clone> OutputAssembler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one iteration: `repetitions` clones of the kept bands of `input`.
    /// Returns the span of the output occupied by this iteration.
    pub fn push_iteration(&mut self, input: &[T], kept: &Bands, repetitions: usize) -> Range<usize> {
        let start = self.events.len();
        let [lower, upper] = kept.slices(input);
        let repetitions = if kept.is_empty() { 0 } else { repetitions };
        for _ in 0..repetitions {
            self.events.extend_from_slice(lower);
            self.events.extend_from_slice(upper);
        }
        let span = start..self.events.len();
        self.spans.push(span.clone());
        span
    }

    pub fn iterations(&self) -> usize {
        self.spans.len()
    }

    pub fn events(&self) -> &[T] {
        &self.events
    }

    pub fn finish(self, stop_reason: StopReason) -> ProcessOutput<T> {
        ProcessOutput {
            events: self.events,
            spans: self.spans,
            stop_reason,
        }
    }
}

/// The materialized result of one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput<T> {
    /// All emitted events, flattened.
    pub events: Vec<T>,
    /// One span into `events` per iteration (covering all its repetitions).
    pub spans: Vec<Range<usize>>,
    pub stop_reason: StopReason,
}

impl<T> ProcessOutput<T> {
    /// The emitted chunk of each iteration, in order.
    pub fn iterations(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.spans.iter().map(|span| &self.events[span.clone()])
    }

    /// Number of events emitted per iteration.
    pub fn iteration_lengths(&self) -> Vec<usize> {
        self.spans.iter().map(|span| span.len()).collect()
    }

    pub fn into_events(self) -> Vec<T> {
        self.events
    }
}
