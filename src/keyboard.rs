//! Active note tracking for key highlighting.

use std::collections::BTreeSet;

use crate::midi::{NoteEvent, NoteKind};

/// The set of note numbers currently sounding.
///
/// Fed by decoded [`NoteEvent`]s, read by the keyboard renderer to decide
/// which keys light up. A note is a member exactly when its most recent
/// event was a press with no release since. Both directions are idempotent:
/// repeated presses and releases of the same note leave the set unchanged
/// after the first.
///
/// Iteration runs in ascending note order, i.e. left to right across the
/// keyboard.
///
/// # Examples
///
/// ```
/// use sightread::{ActiveNotes, decode};
///
/// let mut held = ActiveNotes::new();
/// held.apply(&decode(&[0x90, 60, 100], 0.0).unwrap());
/// held.apply(&decode(&[0x90, 64, 90], 1.0).unwrap());
/// assert!(held.contains(60));
/// assert_eq!(held.len(), 2);
///
/// held.apply(&decode(&[0x80, 60, 0], 2.0).unwrap());
/// assert!(!held.contains(60));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActiveNotes {
    notes: BTreeSet<u8>,
}

impl ActiveNotes {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the set from a decoded note event.
    pub fn apply(&mut self, event: &NoteEvent) {
        match event.kind {
            NoteKind::On => self.press(event.note),
            NoteKind::Off => self.release(event.note),
        }
    }

    /// Marks a note as held. A no-op if it already is.
    pub fn press(&mut self, note: u8) {
        self.notes.insert(note);
    }

    /// Marks a note as released. A no-op if it is not held.
    pub fn release(&mut self, note: u8) {
        self.notes.remove(&note);
    }

    /// Returns true if the note is currently held.
    pub fn contains(&self, note: u8) -> bool {
        self.notes.contains(&note)
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if no notes are held.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Drops all held notes. Used when the input source is switched or
    /// disconnects, so stale highlights never survive a device change.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Iterates over held note numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.notes.iter().copied()
    }
}
