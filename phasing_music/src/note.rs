// A minimal duration-bearing event.
//
// The processes are generic over any `Clone` element, but the CLI and most
// tests need something concrete: `Note` pairs a MIDI pitch with a duration in
// eighth-note beats. `Timed` is the small seam downstream code uses to read or
// overwrite the duration of an emitted copy.
//
// Pitch names are spelled with sharps for C#/F# and flats for Eb/Ab/Bb, with
// the octave after the letter (`C4` = MIDI 60). Parsing accepts either
// accidental and any letter case, plus an optional `:duration` suffix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Default note duration in eighth-note beats (a quarter note).
pub const DEFAULT_DURATION: u32 = 2;

/// Something with a duration that may be rewritten after emission.
pub trait Timed {
    fn duration(&self) -> u32;
    fn set_duration(&mut self, duration: u32);
}

/// Sum of the durations of `events`.
pub fn total_duration<T: Timed>(events: &[T]) -> u64 {
    events.iter().map(|e| u64::from(e.duration())).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// MIDI pitch (60 = middle C).
    pub pitch: u8,
    /// Duration in eighth-note beats.
    pub duration: u32,
}

impl Note {
    pub fn new(pitch: u8, duration: u32) -> Self {
        Self { pitch, duration }
    }

    /// Name with octave, e.g. `"C4"`, `"Bb3"`.
    pub fn name(&self) -> String {
        let octave = i32::from(self.pitch / 12) - 1;
        format!("{}{}", pitch_class_name(self.pitch), octave)
    }

    /// Parse `"C4"`, `"f#3"`, `"Bb2:4"` (pitch, optional `:duration`).
    pub fn parse(token: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidNote(token.to_string());
        let (pitch_text, duration) = match token.split_once(':') {
            Some((pitch, dur)) => (pitch, dur.parse::<u32>().map_err(|_| invalid())?),
            None => (token, DEFAULT_DURATION),
        };

        let mut chars = pitch_text.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(invalid()),
        };
        let rest = chars.as_str();
        let octave_start = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(invalid)?;
        let (accidentals, octave) = rest.split_at(octave_start);
        let mut alter = 0;
        for c in accidentals.chars() {
            match c {
                '#' => alter += 1,
                'b' => alter -= 1,
                _ => return Err(invalid()),
            }
        }
        let octave: i32 = octave.parse().map_err(|_| invalid())?;
        let pitch = octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|m| m.checked_add(base + alter))
            .and_then(|midi| u8::try_from(midi).ok())
            .filter(|&p| p <= 127)
            .ok_or_else(invalid)?;
        Ok(Note::new(pitch, duration))
    }
}

impl Timed for Note {
    fn duration(&self) -> u32 {
        self.duration
    }

    fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse a whitespace-separated list of note tokens.
pub fn parse_notes(text: &str) -> Result<Vec<Note>, ConfigurationError> {
    text.split_whitespace().map(Note::parse).collect()
}

/// Join note names with spaces.
pub fn format_notes(notes: &[Note]) -> String {
    notes.iter().map(Note::name).collect::<Vec<_>>().join(" ")
}

fn pitch_class_name(pitch: u8) -> &'static str {
    match pitch % 12 {
        0 => "C",
        1 => "C#",
        2 => "D",
        3 => "Eb",
        4 => "E",
        5 => "F",
        6 => "F#",
        7 => "G",
        8 => "Ab",
        9 => "A",
        10 => "Bb",
        _ => "B",
    }
}
