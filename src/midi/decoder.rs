//! Raw MIDI message decoding.
//!
//! Maps the three-byte channel-voice messages delivered by a MIDI input into
//! [`NoteEvent`]s. Only note messages are decoded; everything else (control
//! change, pitch bend, clock, ...) is ignored without error.

use super::event::{NoteEvent, NoteKind};

/// Status byte for a Note On message on channel 1.
pub const NOTE_ON_STATUS: u8 = 0x90;

/// Status byte for a Note Off message on channel 1.
pub const NOTE_OFF_STATUS: u8 = 0x80;

/// Decodes one raw MIDI message into a [`NoteEvent`].
///
/// The rules are fixed:
///
/// - status `0x90` with velocity > 0 → [`NoteKind::On`]
/// - status `0x80`, or `0x90` with velocity 0 (many keyboards release keys
///   this way) → [`NoteKind::Off`] with velocity 0
/// - anything else, including payloads shorter than three bytes → `None`
///
/// Status bytes are compared for exact equality, so only channel 1 note
/// messages are decoded.
///
/// The function is pure: call it once per received message, in arrival
/// order, and feed the result to the active-note set and the session engine.
///
/// # Arguments
///
/// * `data` - The raw message bytes `[status, note, velocity]`
/// * `timestamp_ms` - Timestamp supplied by the input source, in milliseconds
///
/// # Examples
///
/// ```
/// use sightread::{NoteKind, decode};
///
/// // Pressing middle C
/// let event = decode(&[0x90, 60, 100], 5.0).unwrap();
/// assert_eq!(event.kind, NoteKind::On);
/// assert_eq!(event.note, 60);
/// assert_eq!(event.velocity, 100);
///
/// // A Note On with velocity 0 is a release
/// let event = decode(&[0x90, 60, 0], 6.0).unwrap();
/// assert_eq!(event.kind, NoteKind::Off);
///
/// // Control change messages are ignored
/// assert!(decode(&[0xB0, 64, 127], 7.0).is_none());
/// ```
pub fn decode(data: &[u8], timestamp_ms: f64) -> Option<NoteEvent> {
    if data.len() < 3 {
        return None;
    }
    let (status, note, velocity) = (data[0], data[1], data[2]);

    match status {
        NOTE_ON_STATUS if velocity > 0 => Some(NoteEvent {
            note,
            velocity,
            kind: NoteKind::On,
            timestamp_ms,
        }),
        NOTE_ON_STATUS | NOTE_OFF_STATUS => Some(NoteEvent {
            note,
            velocity: 0,
            kind: NoteKind::Off,
            timestamp_ms,
        }),
        _ => None,
    }
}
