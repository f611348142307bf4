use super::note::{NoteId, PitchClass, OCTAVES};

/// Computer keyboard -> pitch, laid out like a piano on the home row.
/// The third column shifts the octave for keys past the B.
pub const KEY_MAP: &[(&str, PitchClass, i8)] = &[
    ("a", PitchClass::C, 0),
    ("w", PitchClass::CSharp, 0),
    ("s", PitchClass::D, 0),
    ("e", PitchClass::DSharp, 0),
    ("d", PitchClass::E, 0),
    ("f", PitchClass::F, 0),
    ("t", PitchClass::FSharp, 0),
    ("g", PitchClass::G, 0),
    ("y", PitchClass::GSharp, 0),
    ("h", PitchClass::A, 0),
    ("u", PitchClass::ASharp, 0),
    ("j", PitchClass::B, 0),
    ("k", PitchClass::C, 1),
    ("o", PitchClass::CSharp, 1),
    ("l", PitchClass::D, 1),
];

pub const OCTAVE_DOWN_KEY: &str = "z";
pub const OCTAVE_UP_KEY: &str = "x";

/// Pitch and octave shift for a physical key, case-insensitive.
pub fn pitch_for_key(key: &str) -> Option<(PitchClass, i8)> {
    KEY_MAP
        .iter()
        .find(|(k, _, _)| k.eq_ignore_ascii_case(key))
        .map(|&(_, pitch, shift)| (pitch, shift))
}

/// Currently selected octave, as an index into the octave range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OctaveSelector {
    octaves: Vec<i8>,
    index: usize,
}

impl Default for OctaveSelector {
    fn default() -> Self {
        Self::new(OCTAVES.to_vec())
    }
}

impl OctaveSelector {
    pub fn new(octaves: Vec<i8>) -> Self {
        Self { octaves, index: 0 }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn octave(&self) -> i8 {
        self.octaves.get(self.index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn can_up(&self) -> bool {
        self.index + 1 < self.octaves.len()
    }

    #[inline]
    pub fn can_down(&self) -> bool {
        self.index > 0
    }

    /// Returns whether the index moved.
    pub fn up(&mut self) -> bool {
        if self.can_up() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn down(&mut self) -> bool {
        if self.can_down() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Note for a physical key at the current octave. Keys whose shift lands
    /// outside the octave range resolve to nothing.
    pub fn note_for_key(&self, key: &str) -> Option<NoteId> {
        let (pitch, shift) = pitch_for_key(key)?;
        let i = self.index as isize + shift as isize;
        let octave = *self.octaves.get(usize::try_from(i).ok()?)?;
        Some(NoteId::new(pitch, octave))
    }
}
