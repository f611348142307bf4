use std::fmt;
use std::str::FromStr;

/// Octaves covered by the keyboard, lowest first.
pub const OCTAVES: [i8; 4] = [2, 3, 4, 5];

/// One of the twelve semitone names within an octave. Accidentals are spelled as sharps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchClass {
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

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Natural pitch classes in left-to-right keyboard order.
    pub const NATURALS: [PitchClass; 7] = [
        PitchClass::C,
        PitchClass::D,
        PitchClass::E,
        PitchClass::F,
        PitchClass::G,
        PitchClass::A,
        PitchClass::B,
    ];

    #[inline]
    pub fn semitone(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_natural(self) -> bool {
        !matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    /// The accidental one semitone above a natural. E and B have none
    /// (E-F and B-C are already a semitone apart).
    #[inline]
    pub fn sharp(self) -> Option<PitchClass> {
        match self {
            PitchClass::C => Some(PitchClass::CSharp),
            PitchClass::D => Some(PitchClass::DSharp),
            PitchClass::F => Some(PitchClass::FSharp),
            PitchClass::G => Some(PitchClass::GSharp),
            PitchClass::A => Some(PitchClass::ASharp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNoteError::UnknownPitch(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNoteError {
    #[error("empty note name")]
    Empty,
    #[error("unknown pitch class `{0}`")]
    UnknownPitch(String),
    #[error("invalid octave `{0}`")]
    InvalidOctave(String),
}

/// A pitch class at a specific octave, e.g. `C#4`.
///
/// This is the only key shared by a key shape, a picking hit and an audio
/// trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId {
    pub octave: i8,
    pub pitch: PitchClass,
}

impl NoteId {
    #[inline]
    pub const fn new(pitch: PitchClass, octave: i8) -> Self {
        Self { octave, pitch }
    }

    /// MIDI note number with C4 = 60.
    #[inline]
    pub fn midi(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.pitch.semitone() as i32
    }

    #[inline]
    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.midi() as f32)
    }

    #[inline]
    pub fn is_natural(self) -> bool {
        self.pitch.is_natural()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNoteError::Empty);
        }
        // Octave starts at the first digit or minus sign after the letter.
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| ParseNoteError::InvalidOctave(String::new()))?;
        let (pitch, octave) = s.split_at(split);
        let pitch: PitchClass = pitch.parse()?;
        let octave: i8 = octave
            .parse()
            .map_err(|_| ParseNoteError::InvalidOctave(octave.to_string()))?;
        Ok(NoteId::new(pitch, octave))
    }
}

#[inline]
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * 2.0_f32.powf((midi - 69.0) / 12.0)
}
