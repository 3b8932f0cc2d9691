// Window boundary calculation.
//
// Given a direction, a process kind, the current window length and the input
// length, `compute_window` returns which part of the input is emitted this
// iteration and whether the window has reached the extremity of the sequence.
// For additive processes the window is the kept region; for subtractive
// processes the window is the removed region and the kept region is its
// complement.
//
// Kept regions are either one band or two disjoint bands (the outer bands of
// inward-additive and outward-subtractive processes). All bounds are
// half-open and clamped into `[0, original_length]`.
//
// Arithmetic is done in `i64` so that `original_length - window_length` may go
// negative before clamping; window lengths beyond `i64::MAX` saturate.

use std::ops::Range;

use crate::direction::{Direction, ProcessKind};

/// The region(s) of the input kept for one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bands {
    Single(Range<usize>),
    /// Lower band first, then upper band. The bands never overlap.
    Split(Range<usize>, Range<usize>),
}

impl Bands {
    /// Number of input positions covered.
    pub fn len(&self) -> usize {
        match self {
            Bands::Single(r) => r.len(),
            Bands::Split(lo, hi) => lo.len() + hi.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the kept slices of `input`, in ascending position order.
    ///
    /// For a single band the second slice is empty.
    pub fn slices<'a, T>(&self, input: &'a [T]) -> [&'a [T]; 2] {
        match self {
            Bands::Single(r) => [&input[r.clone()], &[]],
            Bands::Split(lo, hi) => [&input[lo.clone()], &input[hi.clone()]],
        }
    }

    /// Every kept position, ascending.
    pub fn positions(&self) -> Vec<usize> {
        match self {
            Bands::Single(r) => r.clone().collect(),
            Bands::Split(lo, hi) => lo.clone().chain(hi.clone()).collect(),
        }
    }
}

/// Result of one window computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub kept: Bands,
    /// The window covers (additive) or has consumed (subtractive) the whole
    /// sequence, or the inward/outward bands have met.
    pub extremity_reached: bool,
}

fn clamp(value: i64, len: usize) -> usize {
    // `value` is clamped to `[0, len]`, so the cast back is lossless.
    value.clamp(0, len as i64) as usize
}

/// Compute the kept region for one iteration.
pub fn compute_window(
    direction: Direction,
    kind: ProcessKind,
    window_length: usize,
    original_length: usize,
) -> Window {
    let n = original_length as i64;
    let wl = i64::try_from(window_length).unwrap_or(i64::MAX);

    match direction {
        Direction::Forward => {
            let edge = clamp(wl, original_length);
            let kept = match kind {
                ProcessKind::Additive => Bands::Single(0..edge),
                ProcessKind::Subtractive => Bands::Single(edge..original_length),
            };
            Window {
                kept,
                extremity_reached: edge == original_length,
            }
        }
        Direction::Backward => {
            let edge = clamp(n.saturating_sub(wl), original_length);
            let kept = match kind {
                ProcessKind::Additive => Bands::Single(edge..original_length),
                ProcessKind::Subtractive => Bands::Single(0..edge),
            };
            Window {
                kept,
                extremity_reached: edge == 0,
            }
        }
        Direction::Inward => {
            let lower = wl;
            let upper = n.saturating_sub(wl);
            let (lower, upper, met) = if lower >= upper {
                let mid = original_length / 2;
                (mid, mid, true)
            } else {
                (clamp(lower, original_length), clamp(upper, original_length), false)
            };
            let kept = match kind {
                ProcessKind::Additive => Bands::Split(0..lower, upper..original_length),
                ProcessKind::Subtractive => Bands::Single(lower..upper),
            };
            Window {
                kept,
                extremity_reached: met,
            }
        }
        Direction::Outward => {
            let half = n / 2;
            let lower = clamp(half.saturating_sub(wl), original_length);
            let upper = clamp(half.saturating_add(wl), original_length);
            let kept = match kind {
                ProcessKind::Additive => Bands::Single(lower..upper),
                ProcessKind::Subtractive => Bands::Split(0..lower, upper..original_length),
            };
            Window {
                kept,
                extremity_reached: lower == 0 && upper == original_length,
            }
        }
    }
}
