//! Sightread - core logic for a MIDI keyboard visualizer and sight-reading trainer
//!
//! This library decodes raw MIDI note messages, names notes for display and
//! staff notation, tracks which keys are currently held, and runs the timed
//! practice session (random target notes, scoring, accuracy statistics).
//! Rendering and device access stay outside the crate and talk to it through
//! plain values and the [`input::NoteSource`] seam.

pub mod input;
pub mod keyboard;
pub mod midi;
pub mod pitch;
pub mod session;

// Re-export commonly used types at the crate root
pub use input::{InputError, InputRegistry, NoteHandler, NoteSource};
pub use keyboard::ActiveNotes;
pub use midi::{NoteEvent, NoteKind, decode};
pub use pitch::{Pitch, note_name, staff_key};
pub use session::{
    NoteOutcome, PracticeSession, ResponseRecord, SessionConfig, SessionError, SessionStatus,
    SessionSummary, TargetNote,
};
