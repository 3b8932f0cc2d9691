// Finite integer progressions for driving minimalist processes.
//
// The additive, subtractive and scanning processes in `phasing_music` consume
// their step and repetition values from short cyclic lists of positive
// integers. This crate provides the named progressions composers usually reach
// for (linear counting, primes, Fibonacci numbers, the Kolakoski sequence) as
// plain `Vec<u32>` values, generated fresh on every call.
//
// Every generator returns only strictly positive values, so the output can be
// handed straight to `phasing_music::cycle::CyclicSequence::new` without
// tripping its validation. Generators are finite: callers always name the
// length they want, and the engine cycles through it.
//
// **Constraint: determinism.** Each function is a pure function of its length
// argument. No global tables are cached or mutated between calls, so two
// processes configured from the same progression can never observe each
// other's state.

use serde::{Deserialize, Serialize};

/// Selector for one of the named progressions.
///
/// Serialized as a lowercase string (`"linear"`, `"primes"`, ...) so it can
/// appear directly in JSON process configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionKind {
    /// 1, 2, 3, 4, ...
    Linear,
    /// 2, 3, 5, 7, 11, ...
    Primes,
    /// 1, 1, 2, 3, 5, 8, ...
    Fibonacci,
    /// 1, 2, 2, 1, 1, 2, 1, 2, 2, 1, ... (self-describing run lengths)
    Kolakoski,
}

impl ProgressionKind {
    /// All progressions, in display order.
    pub const ALL: [ProgressionKind; 4] = [
        ProgressionKind::Linear,
        ProgressionKind::Primes,
        ProgressionKind::Fibonacci,
        ProgressionKind::Kolakoski,
    ];

    /// Generate the first `len` terms of this progression.
    pub fn generate(self, len: usize) -> Vec<u32> {
        match self {
            ProgressionKind::Linear => linear(len),
            ProgressionKind::Primes => primes(len),
            ProgressionKind::Fibonacci => fibonacci(len),
            ProgressionKind::Kolakoski => kolakoski(len),
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ProgressionKind::Linear => "linear",
            ProgressionKind::Primes => "primes",
            ProgressionKind::Fibonacci => "fibonacci",
            ProgressionKind::Kolakoski => "kolakoski",
        }
    }

    /// Look up a progression by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == lower)
    }
}

/// The counting numbers `1..=len`.
pub fn linear(len: usize) -> Vec<u32> {
    (1u32..).take(len).collect()
}

/// The first `len` primes, by trial division against the primes found so far.
///
/// Stops early once candidates would pass `u32::MAX`.
pub fn primes(len: usize) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::new();
    let mut candidate: u32 = 2;
    while out.len() < len {
        let is_prime = out
            .iter()
            .take_while(|&&p| u64::from(p) * u64::from(p) <= u64::from(candidate))
            .all(|&p| candidate % p != 0);
        if is_prime {
            out.push(candidate);
        }
        match candidate.checked_add(1) {
            Some(next) => candidate = next,
            None => break,
        }
    }
    out
}

/// Fibonacci numbers starting `1, 1, 2, ...`.
///
/// Stops early if the next term would overflow `u32` (after 47 terms), so the
/// result may be shorter than `len`.
pub fn fibonacci(len: usize) -> Vec<u32> {
    let mut out = Vec::new();
    let (mut a, mut b): (u32, u32) = (1, 1);
    while out.len() < len {
        out.push(a);
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => {
                // `b` is still representable; emit it and stop.
                if out.len() < len {
                    out.push(b);
                }
                break;
            }
        }
    }
    out
}

/// The Kolakoski sequence over {1, 2}: the sequence equals its own run lengths.
pub fn kolakoski(len: usize) -> Vec<u32> {
    let mut out: Vec<u32> = vec![1, 2, 2];
    // out[read] is the length of the next run to write.
    let mut read = 2;
    while out.len() < len {
        let next = if out[out.len() - 1] == 1 { 2 } else { 1 };
        for _ in 0..out[read] {
            out.push(next);
        }
        read += 1;
    }
    out.truncate(len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_counts_from_one() {
        assert_eq!(linear(5), vec![1, 2, 3, 4, 5]);
        assert!(linear(0).is_empty());
    }

    #[test]
    fn primes_prefix() {
        assert_eq!(primes(8), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(primes(1), vec![2]);
    }

    #[test]
    fn fibonacci_prefix() {
        assert_eq!(fibonacci(8), vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn fibonacci_stops_before_overflow() {
        let terms = fibonacci(1000);
        assert!(terms.len() < 1000);
        for pair in terms.windows(3) {
            assert_eq!(pair[0] + pair[1], pair[2]);
        }
    }

    #[test]
    fn unbounded_request_does_not_preallocate() {
        assert_eq!(fibonacci(usize::MAX).len(), 47);
    }

    #[test]
    fn kolakoski_prefix() {
        assert_eq!(
            kolakoski(20),
            vec![1, 2, 2, 1, 1, 2, 1, 2, 2, 1, 2, 2, 1, 1, 2, 1, 1, 2, 2, 1]
        );
        assert_eq!(kolakoski(2), vec![1, 2]);
        assert!(kolakoski(0).is_empty());
    }

    #[test]
    fn kolakoski_describes_its_own_runs() {
        let seq = kolakoski(200);
        let mut runs = Vec::new();
        let mut i = 0;
        while i < seq.len() {
            let start = i;
            while i < seq.len() && seq[i] == seq[start] {
                i += 1;
            }
            runs.push((i - start) as u32);
        }
        // The final run may be truncated, so skip it.
        let complete = runs.len() - 1;
        assert_eq!(&runs[..complete], &seq[..complete]);
    }

    #[test]
    fn every_progression_is_positive_and_exact_length() {
        for kind in ProgressionKind::ALL {
            let values = kind.generate(30);
            assert_eq!(values.len(), 30, "{} length", kind.name());
            assert!(values.iter().all(|&v| v > 0), "{} positive", kind.name());
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            ProgressionKind::from_name("Primes"),
            Some(ProgressionKind::Primes)
        );
        assert_eq!(
            ProgressionKind::from_name(" kolakoski "),
            Some(ProgressionKind::Kolakoski)
        );
        assert_eq!(ProgressionKind::from_name("squares"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ProgressionKind::Fibonacci).unwrap();
        assert_eq!(json, "\"fibonacci\"");
        let kind: ProgressionKind = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(kind, ProgressionKind::Linear);
    }

    #[test]
    fn generation_does_not_share_state_between_calls() {
        let mut first = primes(4);
        first[0] = 99;
        assert_eq!(primes(4), vec![2, 3, 5, 7]);
    }
}
