//! Note event value types.

use crate::pitch::note_name;

/// Logical classification of a decoded channel-voice message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// A key was pressed
    On,
    /// A key was released
    Off,
}

/// A decoded note message from a MIDI input.
///
/// One event is constructed per incoming message, in arrival order, and
/// consumed immediately; events are never stored, reordered, or deduplicated.
///
/// # Examples
///
/// ```
/// use sightread::{NoteEvent, NoteKind};
///
/// let event = NoteEvent {
///     note: 60,
///     velocity: 100,
///     kind: NoteKind::On,
///     timestamp_ms: 12.5,
/// };
/// assert!(event.is_on());
/// assert_eq!(event.name(), "C4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// MIDI note number (0-127)
    pub note: u8,
    /// Key velocity (0-127); always 0 for [`NoteKind::Off`]
    pub velocity: u8,
    /// Whether the key was pressed or released
    pub kind: NoteKind,
    /// Timestamp supplied by the input source, in milliseconds
    pub timestamp_ms: f64,
}

impl NoteEvent {
    /// Returns true for a key press.
    pub fn is_on(&self) -> bool {
        self.kind == NoteKind::On
    }

    /// Returns true for a key release.
    pub fn is_off(&self) -> bool {
        self.kind == NoteKind::Off
    }

    /// Display name of the event's note, e.g. `"C4"`.
    pub fn name(&self) -> String {
        note_name(self.note)
    }
}
