// Phasing CLI entry point.
//
// Runs an additive, subtractive or scanning process over a list of notes,
// prints each iteration, and optionally writes the flattened result as JSON.
//
// Usage:
//   cargo run -p phasing_music -- <additive|subtractive|scanning>
//     [--notes "C4 D4 E4"] [--input notes.json] [--config process.json]
//     [--direction DIR] [--step SPEC] [--step-mode MODE] [--repetitions SPEC]
//     [--iterations N] [--ceiling N] [--window N] [--output out.json]
//
// Directions: forward, backward, inward, outward (scanning: forward, backward)
// Step modes: relative, absolute
// SPEC: an integer (`2`), a list (`1,2,3`) or a progression (`primes:8`)
//
// Command-line flags override values from --config. Set RUST_LOG=debug to
// trace every iteration.

use phasing_music::assemble::ProcessOutput;
use phasing_music::config::{CycleSpec, ProcessConfig};
use phasing_music::direction::ProcessKind;
use phasing_music::engine::SequenceEngine;
use phasing_music::note::{Note, format_notes, parse_notes, total_duration};
use phasing_music::scanning::run_scan;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_NOTES: &str = "C4 D4 E4 F4 G4 A4 B4 C5";

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let process = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("additive");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => ProcessConfig::load(Path::new(path))?,
        None => ProcessConfig::default(),
    };
    if let Some(v) = flag_value(&args, "--direction") {
        config.direction = v.parse()?;
    }
    if let Some(v) = flag_value(&args, "--step") {
        config.step = CycleSpec::parse("step", v)?;
    }
    if let Some(v) = flag_value(&args, "--step-mode") {
        config.step_mode = v.parse()?;
    }
    if let Some(v) = flag_value(&args, "--repetitions") {
        config.repetitions = CycleSpec::parse("repetition", v)?;
    }
    if let Some(n) = parse_flag(&args, "--iterations")? {
        config.iteration_limit = Some(n);
    }
    if let Some(n) = parse_flag(&args, "--ceiling")? {
        config.iteration_ceiling = Some(n);
    }
    if let Some(n) = parse_flag(&args, "--window")? {
        config.window_size = n;
    }

    let notes = load_notes(&args)?;

    println!("=== Phasing ===");
    println!("Process: {}", process);
    println!("Direction: {}", config.direction);
    println!("Step mode: {}", config.step_mode);
    println!("Input: {} ({} notes)", format_notes(&notes), notes.len());
    println!();

    let output: ProcessOutput<Note> = match process {
        "additive" => SequenceEngine::new(ProcessKind::Additive, &config)?.run(&notes),
        "subtractive" => SequenceEngine::new(ProcessKind::Subtractive, &config)?.run(&notes),
        "scanning" => {
            if config.iteration_limit.is_some() || config.repetitions != CycleSpec::Single(1) {
                eprintln!("Note: scanning ignores --iterations and --repetitions.");
            }
            run_scan(&notes, &config.scan_config())?
        }
        other => return Err(format!("unknown process '{}'", other).into()),
    };

    for (i, chunk) in output.iterations().enumerate() {
        println!("{:>4}: {}", i + 1, format_notes(chunk));
    }
    println!();
    println!(
        "{} iterations, {} notes, {} beats ({}).",
        output.spans.len(),
        output.events.len(),
        total_duration(&output.events),
        output.stop_reason
    );

    if let Some(path) = flag_value(&args, "--output") {
        let json = serde_json::to_string_pretty(&output.events)?;
        std::fs::write(path, json)?;
        println!("Wrote {}", path);
    }
    Ok(())
}

fn load_notes(args: &[String]) -> Result<Vec<Note>, Box<dyn std::error::Error>> {
    if let Some(path) = flag_value(args, "--input") {
        let data = std::fs::read_to_string(path)?;
        let notes: Vec<Note> = serde_json::from_str(&data)?;
        return Ok(notes);
    }
    let text = flag_value(args, "--notes").unwrap_or(DEFAULT_NOTES);
    Ok(parse_notes(text)?)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// Parse the value after `flag`, if present. A value that fails to parse is
/// an error rather than a silently ignored flag.
fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    flag_value(args, flag)
        .map(|v| {
            v.parse()
                .map_err(|e| format!("invalid value '{}' for {}: {}", v, flag, e))
        })
        .transpose()
}
