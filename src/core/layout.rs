use super::note::{NoteId, PitchClass, OCTAVES};
use fnv::FnvHashMap;
use glam::Vec3;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Natural,
    Accidental,
}

/// Visual state of a key. The renderer maps this to an actual color and
/// never stores color itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyColor {
    RestingNatural,
    RestingAccidental,
    Active,
}

impl KeyColor {
    #[inline]
    pub fn resting(kind: KeyKind) -> Self {
        match kind {
            KeyKind::Natural => KeyColor::RestingNatural,
            KeyKind::Accidental => KeyColor::RestingAccidental,
        }
    }
}

/// Geometry tuning for the key boxes, in world units.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub key_width: f32,
    pub key_height: f32,
    pub key_depth: f32,
    /// Fraction of `key_width` a box actually fills; the rest is the gap.
    pub width_fill: f32,
    /// Accidental height relative to a natural.
    pub accidental_height: f32,
    /// Offset of an accidental from its natural: right, up and toward the viewer.
    pub accidental_nudge: Vec3,
    pub octaves: Vec<i8>,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            key_width: 0.2,
            key_height: 0.4,
            key_depth: 0.1,
            width_fill: 0.8,
            accidental_height: 0.6,
            accidental_nudge: Vec3::new(0.1, 0.08, 0.1),
            octaves: OCTAVES.to_vec(),
        }
    }
}

impl LayoutParams {
    #[inline]
    pub fn group_spacing(&self) -> f32 {
        self.key_width * PitchClass::NATURALS.len() as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyShape {
    pub note: NoteId,
    pub kind: KeyKind,
    pub center: Vec3,
    pub size: Vec3,
    pub color: KeyColor,
}

impl KeyShape {
    /// Axis-aligned bounds as `(min, max)`.
    #[inline]
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = self.size * 0.5;
        (self.center - half, self.center + half)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.color == KeyColor::Active
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OctaveGroup {
    pub octave: i8,
    pub offset_x: f32,
    /// Indices into `Keyboard::keys`.
    pub keys: Range<usize>,
}

#[derive(Clone, Debug)]
pub struct Keyboard {
    keys: Vec<KeyShape>,
    groups: Vec<OctaveGroup>,
    index: FnvHashMap<NoteId, usize>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::build(&LayoutParams::default())
    }

    pub fn build(params: &LayoutParams) -> Self {
        let mut keys = Vec::with_capacity(params.octaves.len() * 12);
        let mut groups = Vec::with_capacity(params.octaves.len());
        let natural_size = Vec3::new(
            params.key_width * params.width_fill,
            params.key_height,
            params.key_depth,
        );
        let accidental_size = Vec3::new(
            natural_size.x,
            params.key_height * params.accidental_height,
            params.key_depth,
        );

        for (i, &octave) in params.octaves.iter().enumerate() {
            let offset_x = i as f32 * params.group_spacing();
            let start = keys.len();
            for (n, &pitch) in PitchClass::NATURALS.iter().enumerate() {
                let x = offset_x + n as f32 * params.key_width;
                keys.push(KeyShape {
                    note: NoteId::new(pitch, octave),
                    kind: KeyKind::Natural,
                    center: Vec3::new(x, 0.0, 0.0),
                    size: natural_size,
                    color: KeyColor::RestingNatural,
                });
                if let Some(sharp) = pitch.sharp() {
                    keys.push(KeyShape {
                        note: NoteId::new(sharp, octave),
                        kind: KeyKind::Accidental,
                        center: Vec3::new(x, 0.0, 0.0) + params.accidental_nudge,
                        size: accidental_size,
                        color: KeyColor::RestingAccidental,
                    });
                }
            }
            groups.push(OctaveGroup {
                octave,
                offset_x,
                keys: start..keys.len(),
            });
        }

        // Center horizontally on the midpoint of the outermost box edges.
        let (min_x, max_x) = keys.iter().fold((f32::MAX, f32::MIN), |(lo, hi), k| {
            let (min, max) = k.bounds();
            (lo.min(min.x), hi.max(max.x))
        });
        if min_x <= max_x {
            let shift = -(min_x + max_x) * 0.5;
            for key in &mut keys {
                key.center.x += shift;
            }
            for group in &mut groups {
                group.offset_x += shift;
            }
        }

        let index = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.note, i))
            .collect::<FnvHashMap<_, _>>();

        Self {
            keys,
            groups,
            index,
        }
    }

    #[inline]
    pub fn keys(&self) -> &[KeyShape] {
        &self.keys
    }

    #[inline]
    pub fn groups(&self) -> &[OctaveGroup] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, octave_index: usize) -> Option<&OctaveGroup> {
        self.groups.get(octave_index)
    }

    pub fn group_keys(&self, octave_index: usize) -> &[KeyShape] {
        match self.groups.get(octave_index) {
            Some(g) => &self.keys[g.keys.clone()],
            None => &[],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn index_of(&self, note: NoteId) -> Option<usize> {
        self.index.get(&note).copied()
    }

    #[inline]
    pub fn get(&self, note: NoteId) -> Option<&KeyShape> {
        self.index_of(note).map(|i| &self.keys[i])
    }

    #[inline]
    pub fn key(&self, index: usize) -> Option<&KeyShape> {
        self.keys.get(index)
    }

    pub fn set_color(&mut self, index: usize, color: KeyColor) {
        if let Some(key) = self.keys.get_mut(index) {
            key.color = color;
        }
    }

    /// Highlight a key. Returns false for notes not on this keyboard.
    pub fn activate(&mut self, note: NoteId) -> bool {
        match self.index_of(note) {
            Some(i) => {
                self.keys[i].color = KeyColor::Active;
                true
            }
            None => false,
        }
    }

    /// Put a key back to the resting color of its own kind.
    pub fn restore(&mut self, note: NoteId) {
        if let Some(i) = self.index_of(note) {
            let key = &mut self.keys[i];
            key.color = KeyColor::resting(key.kind);
        }
    }
}
