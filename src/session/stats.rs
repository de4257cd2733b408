//! Session statistics.
//!
//! Pure functions over the ordered response history. Everything here is
//! recomputed from the records; nothing is accumulated incrementally, so
//! the numbers cannot drift from the history they describe.

/// One recorded attempt at the current target. Append-only, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    /// The target's note number at the time of the attempt
    pub expected_note: u8,
    /// The note that was actually played
    pub actual_note: u8,
    /// Whether the attempt matched the target
    pub correct: bool,
    /// Milliseconds from target creation to the attempt
    pub response_time_ms: f64,
    /// Set when `response_time_ms` came out negative. The value is kept
    /// unclamped; a negative time means the clock ran backwards between
    /// target creation and the attempt.
    pub timing_anomaly: bool,
}

/// Read-only snapshot computed once when a session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Total attempts recorded
    pub total_responses: usize,
    /// Attempts that matched their target
    pub correct_count: usize,
    /// `round(100 * correct / total)`, 0 with no attempts
    pub accuracy_percent: u8,
    /// Rounded mean response time; signed because anomalous negative
    /// records are averaged as-is
    pub avg_response_time_ms: i64,
    /// Cumulative points after each response, for charting
    pub cumulative_points: Vec<u32>,
}

/// Percentage of attempts that were correct, rounded. 0 when empty.
///
/// # Examples
///
/// ```
/// use sightread::session::accuracy_percent;
///
/// assert_eq!(accuracy_percent(&[]), 0);
/// ```
pub fn accuracy_percent(responses: &[ResponseRecord]) -> u8 {
    if responses.is_empty() {
        return 0;
    }
    let correct = responses.iter().filter(|r| r.correct).count();
    (100.0 * correct as f64 / responses.len() as f64).round() as u8
}

/// Rounded mean response time in milliseconds. 0 when empty.
pub fn avg_response_time_ms(responses: &[ResponseRecord]) -> i64 {
    if responses.is_empty() {
        return 0;
    }
    let total: f64 = responses.iter().map(|r| r.response_time_ms).sum();
    (total / responses.len() as f64).round() as i64
}

/// Points-over-time series for the results chart.
///
/// Entry `i` is `round((i + 1) * running_accuracy * 100)` where
/// `running_accuracy` is the fraction correct among the first `i + 1`
/// responses. Computed as a prefix scan over the history. The series grows
/// by one entry per response but its values can fall when accuracy drops.
///
/// # Examples
///
/// ```
/// use sightread::session::{ResponseRecord, cumulative_points};
///
/// let record = |correct| ResponseRecord {
///     expected_note: 60,
///     actual_note: if correct { 60 } else { 62 },
///     correct,
///     response_time_ms: 100.0,
///     timing_anomaly: false,
/// };
///
/// let series = cumulative_points(&[record(true), record(false), record(true)]);
/// assert_eq!(series, vec![100, 100, 200]);
/// ```
pub fn cumulative_points(responses: &[ResponseRecord]) -> Vec<u32> {
    let mut series = Vec::with_capacity(responses.len());
    let mut correct_so_far = 0usize;

    for (i, response) in responses.iter().enumerate() {
        if response.correct {
            correct_so_far += 1;
        }
        let running_accuracy = correct_so_far as f64 / (i + 1) as f64;
        series.push(((i + 1) as f64 * running_accuracy * 100.0).round() as u32);
    }

    series
}

/// Computes the end-of-session snapshot from the full response history.
pub fn summarize(responses: &[ResponseRecord]) -> SessionSummary {
    SessionSummary {
        total_responses: responses.len(),
        correct_count: responses.iter().filter(|r| r.correct).count(),
        accuracy_percent: accuracy_percent(responses),
        avg_response_time_ms: avg_response_time_ms(responses),
        cumulative_points: cumulative_points(responses),
    }
}
