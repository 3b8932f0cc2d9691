// Phasing: minimalist process engine.
//
// Generates new event sequences from an existing one by repeatedly carving
// out, growing or shrinking a window of it: additive processes grow a kept
// window, subtractive processes grow a removed window, and scanning slides a
// fixed-size window across the input. Window growth follows a cyclic step
// progression in relative or absolute mode; each iteration may be repeated
// according to a cyclic repetition progression.
//
// Architecture:
// - direction.rs: Direction / StepMode / ProcessKind enums
// - cycle.rs: Cyclic step and repetition sequences with wrap detection
// - window.rs: Per-direction window boundary calculation
// - state.rs: Mutable per-run process state and stop reasons
// - assemble.rs: Clone-on-emit output assembly with per-iteration spans
// - engine.rs: Additive and subtractive process driver
// - scanning.rs: Sliding-window scanning process
// - config.rs: JSON/CLI process configuration and cycle specs
// - note.rs: Minimal pitch + duration event and pitch-name parsing
// - error.rs: Configuration errors
//
// Named step progressions (primes, Kolakoski, ...) live in the
// `phasing_progression` crate.
//
// The engine is pure and deterministic: a run reads its input, owns its
// state, and returns a freshly allocated output.

pub mod assemble;
pub mod config;
pub mod cycle;
pub mod direction;
pub mod engine;
pub mod error;
pub mod note;
pub mod scanning;
pub mod state;
pub mod window;

pub use config::{CycleSpec, ProcessConfig, ScanConfig};
pub use direction::{Direction, ProcessKind, StepMode};
pub use engine::{SequenceEngine, additive_process, subtractive_process};
pub use error::ConfigurationError;
pub use scanning::scanning_process;
