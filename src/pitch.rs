//! Note naming for display and staff notation.
//!
//! Maps MIDI note numbers (0-127) to human-readable names like `"C#4"` and
//! to staff keys like `"c#/4"`. Black keys are always spelled with sharps;
//! enharmonic spelling is never chosen from context.

/// Musical note names in the chromatic scale.
///
/// Each variant represents one of the 12 notes in the chromatic scale,
/// spelled with sharps (e.g. `CSharp`, never D flat).
///
/// # Examples
///
/// ```
/// use sightread::Pitch;
///
/// // Middle C is MIDI note 60
/// let (pitch, octave) = Pitch::from_midi(60).unwrap();
/// assert_eq!(pitch, Pitch::C);
/// assert_eq!(octave, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// Returns the semitone offset from C (0-11) for this pitch.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightread::Pitch;
    ///
    /// assert_eq!(Pitch::C.semitone_offset(), 0);
    /// assert_eq!(Pitch::CSharp.semitone_offset(), 1);
    /// assert_eq!(Pitch::A.semitone_offset(), 9);
    /// ```
    pub fn semitone_offset(&self) -> u8 {
        match self {
            Pitch::C => 0,
            Pitch::CSharp => 1,
            Pitch::D => 2,
            Pitch::DSharp => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::FSharp => 6,
            Pitch::G => 7,
            Pitch::GSharp => 8,
            Pitch::A => 9,
            Pitch::ASharp => 10,
            Pitch::B => 11,
        }
    }

    /// Splits a MIDI note number into pitch class and octave.
    ///
    /// The octave follows the MIDI convention: `floor(note / 12) - 1`, so
    /// note 0 is C-1 and note 60 is C4. Returns `None` above 127.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightread::Pitch;
    ///
    /// assert_eq!(Pitch::from_midi(69), Some((Pitch::A, 4)));
    /// assert_eq!(Pitch::from_midi(0), Some((Pitch::C, -1)));
    /// assert_eq!(Pitch::from_midi(200), None);
    /// ```
    pub fn from_midi(note: u8) -> Option<(Pitch, i8)> {
        if note > 127 {
            return None;
        }
        let pitch = match note % 12 {
            0 => Pitch::C,
            1 => Pitch::CSharp,
            2 => Pitch::D,
            3 => Pitch::DSharp,
            4 => Pitch::E,
            5 => Pitch::F,
            6 => Pitch::FSharp,
            7 => Pitch::G,
            8 => Pitch::GSharp,
            9 => Pitch::A,
            10 => Pitch::ASharp,
            _ => Pitch::B,
        };
        Some((pitch, (note / 12) as i8 - 1))
    }

    /// Display spelling of the pitch class, e.g. `"C#"`.
    pub fn name(&self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::B => "B",
        }
    }

    /// Lowercase spelling used in staff keys, e.g. `"c#"`.
    pub fn staff_name(&self) -> &'static str {
        match self {
            Pitch::C => "c",
            Pitch::CSharp => "c#",
            Pitch::D => "d",
            Pitch::DSharp => "d#",
            Pitch::E => "e",
            Pitch::F => "f",
            Pitch::FSharp => "f#",
            Pitch::G => "g",
            Pitch::GSharp => "g#",
            Pitch::A => "a",
            Pitch::ASharp => "a#",
            Pitch::B => "b",
        }
    }
}

/// Returns the display name of a MIDI note number, e.g. `"C#4"`.
///
/// Note numbers outside `[0, 127]` name no key and map to the marker
/// string `"Invalid Note"`.
///
/// # Examples
///
/// ```
/// use sightread::note_name;
///
/// assert_eq!(note_name(60), "C4");
/// assert_eq!(note_name(61), "C#4");
/// assert_eq!(note_name(0), "C-1");
/// assert_eq!(note_name(128), "Invalid Note");
/// ```
pub fn note_name(note: u8) -> String {
    match Pitch::from_midi(note) {
        Some((pitch, octave)) => format!("{}{}", pitch.name(), octave),
        None => String::from("Invalid Note"),
    }
}

/// Returns the staff-notation key of a MIDI note number, e.g. `"c/4"`.
///
/// The format is `<pitch>/<octave>` with a lowercase pitch class, the form
/// staff renderers take for note placement. Black keys use sharp spelling
/// only. Returns `None` outside `[0, 127]`.
///
/// # Examples
///
/// ```
/// use sightread::staff_key;
///
/// assert_eq!(staff_key(60).as_deref(), Some("c/4"));
/// assert_eq!(staff_key(61).as_deref(), Some("c#/4"));
/// assert_eq!(staff_key(128), None);
/// ```
pub fn staff_key(note: u8) -> Option<String> {
    let (pitch, octave) = Pitch::from_midi(note)?;
    Some(format!("{}/{}", pitch.staff_name(), octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitone_offsets_cover_the_octave() {
        let pitches = [
            Pitch::C,
            Pitch::CSharp,
            Pitch::D,
            Pitch::DSharp,
            Pitch::E,
            Pitch::F,
            Pitch::FSharp,
            Pitch::G,
            Pitch::GSharp,
            Pitch::A,
            Pitch::ASharp,
            Pitch::B,
        ];
        for (i, pitch) in pitches.iter().enumerate() {
            assert_eq!(pitch.semitone_offset() as usize, i);
        }
    }

    #[test]
    fn test_from_midi_round_trip() {
        for note in 0..=127u8 {
            let (pitch, octave) = Pitch::from_midi(note).unwrap();
            let rebuilt = (octave as i16 + 1) * 12 + pitch.semitone_offset() as i16;
            assert_eq!(rebuilt, note as i16);
        }
    }

    #[test]
    fn test_note_name_known_values() {
        assert_eq!(note_name(0), "C-1");
        assert_eq!(note_name(12), "C0");
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(61), "C#4");
        assert_eq!(note_name(69), "A4");
        assert_eq!(note_name(72), "C5");
        assert_eq!(note_name(127), "G9");
    }

    #[test]
    fn test_note_name_invalid_marker() {
        assert_eq!(note_name(128), "Invalid Note");
        assert_eq!(note_name(255), "Invalid Note");
    }

    #[test]
    fn test_note_name_defined_for_full_range() {
        for note in 0..=127u8 {
            let name = note_name(note);
            assert_ne!(name, "Invalid Note");
            // Deterministic
            assert_eq!(note_name(note), name);
        }
    }

    #[test]
    fn test_staff_key_known_values() {
        assert_eq!(staff_key(60).as_deref(), Some("c/4"));
        assert_eq!(staff_key(61).as_deref(), Some("c#/4"));
        assert_eq!(staff_key(71).as_deref(), Some("b/4"));
        assert_eq!(staff_key(72).as_deref(), Some("c/5"));
        assert_eq!(staff_key(0).as_deref(), Some("c/-1"));
    }

    #[test]
    fn test_staff_key_out_of_range() {
        assert_eq!(staff_key(128), None);
    }

    #[test]
    fn test_sharps_only() {
        // Every black key is spelled with '#', never as a flat
        for note in 0..=127u8 {
            let is_black = matches!(note % 12, 1 | 3 | 6 | 8 | 10);
            assert_eq!(note_name(note).contains('#'), is_black);
            assert_eq!(staff_key(note).unwrap().contains('#'), is_black);
        }
    }
}
