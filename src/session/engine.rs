//! The practice session state machine.

use rand::Rng;

use super::errors::SessionError;
use super::stats::{self, ResponseRecord, SessionSummary};
use super::target::{TargetGenerator, TargetNote};

/// Points awarded for each correct hit.
pub const POINTS_PER_HIT: u32 = 100;

/// Lifecycle of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No session in progress
    #[default]
    Idle,
    /// Countdown live, targets being served
    Running,
    /// Countdown expired or stopped; summary available
    Finished,
}

/// Configuration for one practice run.
///
/// Validated by [`PracticeSession::start`]: the range must be ordered and
/// inside 0-127, the duration positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Lowest candidate target note
    pub range_min: u8,
    /// Highest candidate target note (inclusive)
    pub range_max: u8,
    /// Session length in seconds
    pub duration_seconds: u32,
}

impl SessionConfig {
    fn validate(&self) -> Result<(), SessionError> {
        if self.range_min > self.range_max || self.range_max > 127 {
            return Err(SessionError::InvalidRange {
                min: self.range_min,
                max: self.range_max,
            });
        }
        if self.duration_seconds == 0 {
            return Err(SessionError::InvalidDuration(self.duration_seconds));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    /// One minute of targets between middle C and the C above it.
    fn default() -> Self {
        Self {
            range_min: 60,
            range_max: 72,
            duration_seconds: 60,
        }
    }
}

/// What happened to a single attempt, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteOutcome {
    /// Whether the played note matched the target
    pub correct: bool,
    /// Milliseconds from target creation to the attempt
    pub response_time_ms: f64,
    /// True when the response time came out negative; the record is kept
    /// unclamped and the caller should treat this as a clock defect
    pub timing_anomaly: bool,
}

/// A timed random-note practice session.
///
/// The engine is driven from outside: decoded note-on events arrive through
/// [`on_note_on`](Self::on_note_on) and one-second timer ticks through
/// [`tick`](Self::tick). Each correct hit scores [`POINTS_PER_HIT`] and
/// advances to a freshly generated target; a miss records the attempt and
/// leaves the target up for another try. When the countdown reaches zero the
/// session finishes and a [`SessionSummary`] is computed from the full
/// response history.
///
/// State moves `Idle → Running → Finished`, and back to `Idle` only through
/// [`reset`](Self::reset). No transition skips a state.
///
/// # Examples
///
/// ```
/// use sightread::{PracticeSession, SessionConfig, SessionStatus};
///
/// let mut session = PracticeSession::new();
/// session.start(SessionConfig::default(), 0.0).unwrap();
/// assert_eq!(session.status(), SessionStatus::Running);
///
/// // Play whatever the engine asks for
/// let target = session.current_target().unwrap().midi_number;
/// let outcome = session.on_note_on(target, 450.0).unwrap();
/// assert!(outcome.correct);
/// assert_eq!(session.score(), 100);
///
/// let summary = session.stop().unwrap();
/// assert_eq!(summary.total_responses, 1);
/// assert_eq!(summary.accuracy_percent, 100);
/// ```
#[derive(Debug, Clone)]
pub struct PracticeSession<R: Rng = rand::rngs::ThreadRng> {
    status: SessionStatus,
    config: SessionConfig,
    targets: TargetGenerator<R>,
    current_target: Option<TargetNote>,
    responses: Vec<ResponseRecord>,
    score: u32,
    remaining_seconds: u32,
    summary: Option<SessionSummary>,
}

impl PracticeSession<rand::rngs::ThreadRng> {
    /// Creates an idle session backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PracticeSession<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PracticeSession<R> {
    /// Creates an idle session with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use sightread::PracticeSession;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let session = PracticeSession::with_rng(rng);
    /// assert!(session.current_target().is_none());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self {
            status: SessionStatus::Idle,
            config: SessionConfig::default(),
            targets: TargetGenerator::with_rng(rng),
            current_target: None,
            responses: Vec::new(),
            score: 0,
            remaining_seconds: 0,
            summary: None,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Points scored so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the countdown; 0 unless running.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The note the player is currently asked to play, while one is live.
    pub fn current_target(&self) -> Option<&TargetNote> {
        self.current_target.as_ref()
    }

    /// The attempts recorded so far, in order.
    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// The end-of-session snapshot, once finished.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// Starts a session: resets history and score, arms the countdown, and
    /// generates the first target.
    ///
    /// Only valid from `Idle`. A running session reports
    /// [`SessionError::AlreadyRunning`]; a finished one reports
    /// [`SessionError::SessionFinished`] until [`reset`](Self::reset) is
    /// called. Invalid configuration is rejected with the state unchanged.
    ///
    /// # Arguments
    ///
    /// * `config` - Note range and duration for this run
    /// * `now_ms` - Current time in milliseconds; stamps the first target
    pub fn start(&mut self, config: SessionConfig, now_ms: f64) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::Running => return Err(SessionError::AlreadyRunning),
            SessionStatus::Finished => return Err(SessionError::SessionFinished),
            SessionStatus::Idle => {}
        }
        config.validate()?;

        self.responses.clear();
        self.score = 0;
        self.summary = None;
        self.remaining_seconds = config.duration_seconds;
        self.current_target = Some(
            self.targets
                .generate(config.range_min, config.range_max, now_ms),
        );
        self.config = config;
        self.status = SessionStatus::Running;
        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `true` exactly on the tick that finishes the session; the
    /// summary is computed at that moment. A no-op (returning `false`) when
    /// not running.
    pub fn tick(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.finish();
            return true;
        }
        false
    }

    /// Judges a played note against the current target.
    ///
    /// Every note-on while running is one attempt: a record is appended
    /// whether or not it matched. A correct hit scores [`POINTS_PER_HIT`]
    /// and swaps in a new target stamped with `occurred_at_ms`; a miss
    /// leaves the target unchanged for another try.
    ///
    /// Returns `None` (and changes nothing) unless a session is running
    /// with a live target.
    ///
    /// A negative computed response time is a clock-ordering defect; it is
    /// recorded unclamped with the anomaly flag set, and the flag is
    /// reported back in the [`NoteOutcome`].
    pub fn on_note_on(&mut self, note: u8, occurred_at_ms: f64) -> Option<NoteOutcome> {
        if self.status != SessionStatus::Running {
            return None;
        }
        let (expected_note, created_at_ms) = match &self.current_target {
            Some(target) => (target.midi_number, target.created_at_ms),
            None => return None,
        };

        let response_time_ms = occurred_at_ms - created_at_ms;
        let timing_anomaly = response_time_ms < 0.0;
        let correct = note == expected_note;

        self.responses.push(ResponseRecord {
            expected_note,
            actual_note: note,
            correct,
            response_time_ms,
            timing_anomaly,
        });

        if correct {
            self.score += POINTS_PER_HIT;
            self.current_target = Some(self.targets.generate(
                self.config.range_min,
                self.config.range_max,
                occurred_at_ms,
            ));
        }

        Some(NoteOutcome {
            correct,
            response_time_ms,
            timing_anomaly,
        })
    }

    /// Ends a running session immediately and returns the summary over the
    /// responses gathered so far. Used by open-ended, untimed variants.
    pub fn stop(&mut self) -> Result<&SessionSummary, SessionError> {
        if self.status != SessionStatus::Running {
            return Err(SessionError::NotRunning);
        }
        Ok(self.finish())
    }

    /// Returns the session to a pristine `Idle` from any state.
    pub fn reset(&mut self) {
        self.status = SessionStatus::Idle;
        self.current_target = None;
        self.responses.clear();
        self.score = 0;
        self.remaining_seconds = 0;
        self.summary = None;
    }

    fn finish(&mut self) -> &SessionSummary {
        let summary = stats::summarize(&self.responses);
        self.current_target = None;
        self.remaining_seconds = 0;
        self.status = SessionStatus::Finished;
        self.summary.insert(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> PracticeSession<StdRng> {
        PracticeSession::with_rng(StdRng::seed_from_u64(99))
    }

    fn config(duration_seconds: u32) -> SessionConfig {
        SessionConfig {
            range_min: 60,
            range_max: 72,
            duration_seconds,
        }
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_seconds(), 0);
        assert!(session.current_target().is_none());
        assert!(session.responses().is_empty());
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_start_generates_first_target() {
        let mut session = session();
        session.start(config(60), 10.0).unwrap();

        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.remaining_seconds(), 60);
        let target = session.current_target().unwrap();
        assert!((60..=72).contains(&target.midi_number));
        assert_eq!(target.created_at_ms, 10.0);
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let mut session = session();

        let inverted = SessionConfig {
            range_min: 72,
            range_max: 60,
            duration_seconds: 60,
        };
        assert_eq!(
            session.start(inverted, 0.0),
            Err(SessionError::InvalidRange { min: 72, max: 60 })
        );

        let out_of_range = SessionConfig {
            range_min: 60,
            range_max: 200,
            duration_seconds: 60,
        };
        assert!(matches!(
            session.start(out_of_range, 0.0),
            Err(SessionError::InvalidRange { .. })
        ));

        assert_eq!(
            session.start(config(0), 0.0),
            Err(SessionError::InvalidDuration(0))
        );

        // All refusals left the session untouched
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_start_while_running_is_refused() {
        let mut session = session();
        session.start(config(60), 0.0).unwrap();
        let target_before = session.current_target().cloned();

        assert_eq!(
            session.start(config(30), 5.0),
            Err(SessionError::AlreadyRunning)
        );
        assert_eq!(session.remaining_seconds(), 60);
        assert_eq!(session.current_target().cloned(), target_before);
    }

    #[test]
    fn test_correct_hit_scores_and_advances() {
        let mut session = session();
        session.start(config(60), 0.0).unwrap();

        let first = session.current_target().unwrap().clone();
        let outcome = session.on_note_on(first.midi_number, 250.0).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.response_time_ms, 250.0);
        assert!(!outcome.timing_anomaly);
        assert_eq!(session.score(), POINTS_PER_HIT);

        let next = session.current_target().unwrap();
        assert_ne!(next.id, first.id);
        assert_eq!(next.created_at_ms, 250.0);
    }

    #[test]
    fn test_miss_keeps_target_for_another_try() {
        let mut session = session();
        session.start(config(60), 0.0).unwrap();

        let target = session.current_target().unwrap().clone();
        let wrong = if target.midi_number == 60 { 61 } else { 60 };
        let outcome = session.on_note_on(wrong, 300.0).unwrap();

        assert!(!outcome.correct);
        assert_eq!(session.score(), 0);
        assert_eq!(session.responses().len(), 1);
        assert_eq!(session.current_target().unwrap().id, target.id);
    }

    #[test]
    fn test_negative_response_time_is_flagged_not_clamped() {
        let mut session = session();
        session.start(config(60), 1000.0).unwrap();

        let target = session.current_target().unwrap().midi_number;
        let outcome = session.on_note_on(target, 900.0).unwrap();

        assert!(outcome.timing_anomaly);
        assert_eq!(outcome.response_time_ms, -100.0);
        assert_eq!(session.responses()[0].response_time_ms, -100.0);
        assert!(session.responses()[0].timing_anomaly);
        // The session keeps running
        assert_eq!(session.status(), SessionStatus::Running);
    }

    #[test]
    fn test_note_on_while_idle_is_noop() {
        let mut session = session();
        assert!(session.on_note_on(60, 0.0).is_none());
        assert_eq!(session.score(), 0);
        assert!(session.responses().is_empty());
        assert!(session.current_target().is_none());
    }

    #[test]
    fn test_tick_counts_down_and_finishes_once() {
        let mut session = session();
        session.start(config(3), 0.0).unwrap();

        assert!(!session.tick());
        assert_eq!(session.remaining_seconds(), 2);
        assert!(!session.tick());
        assert!(session.tick());
        assert_eq!(session.status(), SessionStatus::Finished);
        assert!(session.summary().is_some());

        // Further ticks are no-ops
        assert!(!session.tick());
        assert_eq!(session.status(), SessionStatus::Finished);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut session = session();
        assert!(!session.tick());
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn test_stop_computes_summary_from_partial_history() {
        let mut session = session();
        session.start(config(60), 0.0).unwrap();

        let target = session.current_target().unwrap().midi_number;
        session.on_note_on(target, 100.0).unwrap();

        let summary = session.stop().unwrap().clone();
        assert_eq!(summary.total_responses, 1);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.accuracy_percent, 100);
        assert_eq!(summary.avg_response_time_ms, 100);
        assert_eq!(summary.cumulative_points, vec![100]);

        assert_eq!(session.status(), SessionStatus::Finished);
        assert!(session.current_target().is_none());
    }

    #[test]
    fn test_stop_with_no_responses() {
        let mut session = session();
        session.start(config(60), 0.0).unwrap();

        let summary = session.stop().unwrap();
        assert_eq!(summary.total_responses, 0);
        assert_eq!(summary.accuracy_percent, 0);
        assert_eq!(summary.avg_response_time_ms, 0);
        assert!(summary.cumulative_points.is_empty());
    }

    #[test]
    fn test_stop_when_not_running_is_refused() {
        let mut session = session();
        assert_eq!(session.stop(), Err(SessionError::NotRunning));

        session.start(config(60), 0.0).unwrap();
        session.stop().unwrap();
        assert_eq!(session.stop(), Err(SessionError::NotRunning));
    }

    #[test]
    fn test_restart_requires_reset() {
        let mut session = session();
        session.start(config(1), 0.0).unwrap();
        assert!(session.tick());

        assert_eq!(
            session.start(config(60), 0.0),
            Err(SessionError::SessionFinished)
        );

        session.reset();
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.summary().is_none());
        session.start(config(60), 0.0).unwrap();
        assert_eq!(session.status(), SessionStatus::Running);
        assert!(session.responses().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_note_on_after_finish_is_noop() {
        let mut session = session();
        session.start(config(1), 0.0).unwrap();
        assert!(session.tick());

        assert!(session.on_note_on(60, 2000.0).is_none());
        assert_eq!(session.summary().unwrap().total_responses, 0);
    }
}
