//! Random target-note generation.

use rand::Rng;

use crate::pitch::staff_key;

/// The note the player is currently asked to play.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetNote {
    /// Opaque identifier, unique per generation
    pub id: String,
    /// MIDI note number within the configured range
    pub midi_number: u8,
    /// Staff key for notation rendering, e.g. `"c/4"`
    pub display_key: String,
    /// When the target became visible, in milliseconds
    pub created_at_ms: f64,
}

/// Uniform random target generator.
///
/// Samples note numbers uniformly over an inclusive range, each integer
/// equally likely. The random source is injected so tests can supply a
/// seeded generator.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use sightread::session::TargetGenerator;
///
/// let rng = rand::rngs::StdRng::seed_from_u64(42);
/// let mut targets = TargetGenerator::with_rng(rng);
///
/// let target = targets.generate(60, 72, 0.0);
/// assert!((60..=72).contains(&target.midi_number));
/// ```
#[derive(Debug, Clone)]
pub struct TargetGenerator<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
    counter: u64,
}

impl TargetGenerator<rand::rngs::ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for TargetGenerator<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TargetGenerator<R> {
    /// Creates a generator with a custom RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, counter: 0 }
    }

    /// Generates the next target, uniformly within `[range_min, range_max]`.
    ///
    /// # Arguments
    ///
    /// * `range_min` - Lowest candidate note number
    /// * `range_max` - Highest candidate note number (inclusive)
    /// * `now_ms` - Timestamp to stamp the target with, in milliseconds
    ///
    /// # Panics
    ///
    /// Panics if `range_min > range_max` or `range_max > 127`; the session
    /// engine validates its configuration before calling in.
    pub fn generate(&mut self, range_min: u8, range_max: u8, now_ms: f64) -> TargetNote {
        assert!(range_min <= range_max, "range_min must not exceed range_max");
        assert!(range_max <= 127, "range_max must be a MIDI note number");

        let midi_number = self.rng.gen_range(range_min..=range_max);
        self.counter += 1;

        TargetNote {
            id: format!("target-{}", self.counter),
            midi_number,
            display_key: staff_key(midi_number).expect("note within MIDI range"),
            created_at_ms: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ids_are_unique() {
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(1));
        let a = targets.generate(60, 72, 0.0);
        let b = targets.generate(60, 72, 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display_key_matches_note() {
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(2));
        let target = targets.generate(60, 60, 0.0);
        assert_eq!(target.midi_number, 60);
        assert_eq!(target.display_key, "c/4");
    }

    #[test]
    fn test_created_at_is_stamped() {
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(3));
        let target = targets.generate(60, 72, 1234.5);
        assert_eq!(target.created_at_ms, 1234.5);
    }

    #[test]
    fn test_single_note_range() {
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(4));
        for _ in 0..20 {
            assert_eq!(targets.generate(64, 64, 0.0).midi_number, 64);
        }
    }

    #[test]
    fn test_samples_stay_in_range_and_cover_endpoints() {
        // Statistical check: 1000 draws over a 13-note range land inside it
        // and reach both endpoints.
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(5));
        let mut saw_min = false;
        let mut saw_max = false;

        for _ in 0..1000 {
            let note = targets.generate(60, 72, 0.0).midi_number;
            assert!((60..=72).contains(&note));
            saw_min |= note == 60;
            saw_max |= note == 72;
        }

        assert!(saw_min, "lower endpoint never sampled");
        assert!(saw_max, "upper endpoint never sampled");
    }

    #[test]
    #[should_panic(expected = "range_min must not exceed range_max")]
    fn test_inverted_range_panics() {
        let mut targets = TargetGenerator::with_rng(StdRng::seed_from_u64(6));
        targets.generate(72, 60, 0.0);
    }
}
