//! Session error types.

use std::fmt;

/// Error type for refused session operations.
///
/// None of these is fatal: the engine rejects the operation and stays in
/// its prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `range_min` exceeded `range_max` or a bound was outside 0-127
    InvalidRange { min: u8, max: u8 },
    /// The configured duration was zero
    InvalidDuration(u32),
    /// `start` was called while a session was already running
    AlreadyRunning,
    /// `start` was called on a finished session without a reset
    SessionFinished,
    /// `stop` was called while no session was running
    NotRunning,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidRange { min, max } => {
                write!(f, "invalid note range: {min}-{max}")
            }
            SessionError::InvalidDuration(secs) => {
                write!(f, "session duration must be positive, got {secs}s")
            }
            SessionError::AlreadyRunning => write!(f, "a session is already running"),
            SessionError::SessionFinished => {
                write!(f, "session is finished; reset before starting again")
            }
            SessionError::NotRunning => write!(f, "no session is running"),
        }
    }
}

impl std::error::Error for SessionError {}
