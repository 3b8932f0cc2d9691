// Scanning process: a fixed-size window sliding across the input.
//
// The window keeps `window_size` elements; its start position begins at 0
// and moves under the step progression after every iteration. The first move
// consumes the first step value. In relative mode the step value is added to
// the position; in absolute mode it replaces the position, and a wrap of the
// step cycle ends the run (as in the additive engine's unbounded absolute
// mode). The run ends once the position reaches the end of the input.
//
// Backward scanning mirrors the position from the end of the input. Only
// forward and backward directions exist for scanning, and it has no
// repetition or iteration-limit options.

use tracing::{debug, info};

use crate::assemble::{OutputAssembler, ProcessOutput};
use crate::config::ScanConfig;
use crate::direction::{Direction, StepMode};
use crate::error::ConfigurationError;
use crate::state::StopReason;
use crate::window::Bands;

/// Slide a window over `input` and return the flattened iterations.
pub fn scanning_process<T: Clone>(
    input: &[T],
    config: &ScanConfig,
) -> Result<Vec<T>, ConfigurationError> {
    Ok(run_scan(input, config)?.into_events())
}

/// Like `scanning_process`, but keeps the iteration structure.
pub fn run_scan<T: Clone>(
    input: &[T],
    config: &ScanConfig,
) -> Result<ProcessOutput<T>, ConfigurationError> {
    match config.direction {
        Direction::Forward | Direction::Backward => {}
        other => return Err(ConfigurationError::UnsupportedScanDirection(other)),
    }
    if config.window_size == 0 {
        return Err(ConfigurationError::ZeroWindowSize);
    }
    let mut step = config.step.resolve("step")?;

    let mut out = OutputAssembler::new();
    let len = input.len();
    if len == 0 {
        return Ok(out.finish(StopReason::EmptyInput));
    }

    let mut position: usize = 0;
    let mut step_pending = true;
    let reason = loop {
        let end = position.saturating_add(config.window_size).min(len);
        let kept = match config.direction {
            Direction::Backward => Bands::Single(len - end..len - position),
            _ => Bands::Single(position..end),
        };
        debug!(position, kept = kept.len(), "scanned window");
        out.push_iteration(input, &kept, 1);

        let wrapped = if step_pending {
            step_pending = false;
            false
        } else {
            step.advance()
        };
        if wrapped && config.step_mode == StepMode::Absolute {
            break StopReason::CycleWrapped;
        }
        position = config.step_mode.apply(position, step.current());
        if position >= len {
            break StopReason::ExtremityReached;
        }
    };

    info!(
        direction = %config.direction,
        window_size = config.window_size,
        iterations = out.iterations(),
        events = out.events().len(),
        reason = %reason,
        "scan complete"
    );
    Ok(out.finish(reason))
}
