use super::layout::Keyboard;
use super::note::NoteId;

pub const DEFAULT_BPM: f32 = 120.0;

/// Symbolic note length handed to the audio side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteLength {
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteLength {
    /// Length in beats (quarter note = 1 beat).
    #[inline]
    pub fn beats(self) -> f32 {
        match self {
            NoteLength::Quarter => 1.0,
            NoteLength::Eighth => 0.5,
            NoteLength::Sixteenth => 0.25,
        }
    }

    #[inline]
    pub fn seconds(self, bpm: f32) -> f32 {
        self.beats() * 60.0 / bpm.max(1.0)
    }

    pub fn token(self) -> &'static str {
        match self {
            NoteLength::Quarter => "4n",
            NoteLength::Eighth => "8n",
            NoteLength::Sixteenth => "16n",
        }
    }
}

/// Audio side of a key press. Fire-and-forget; must not block.
pub trait NoteTrigger {
    fn trigger(&mut self, note: NoteId, length: NoteLength);
}

/// Runs on the next release to put the pressed key back.
pub type RevertFn = Box<dyn FnOnce(&mut Keyboard)>;

/// Revert that restores `note` to the resting color of its own key kind.
pub fn restore_key(note: NoteId) -> RevertFn {
    Box::new(move |kb: &mut Keyboard| kb.restore(note))
}

/// Revert for presses with no key to recolor (physical keyboard input).
pub fn no_revert() -> RevertFn {
    Box::new(|_: &mut Keyboard| {})
}

/// Fires notes and holds the single pending revert.
///
/// Only the most recent press is reverted on release: a second press before
/// a release replaces the first press's revert without running it.
pub struct NotePlayer {
    length: NoteLength,
    revert: Option<RevertFn>,
    last_played: Option<NoteId>,
}

impl Default for NotePlayer {
    fn default() -> Self {
        Self::new(NoteLength::Eighth)
    }
}

impl NotePlayer {
    pub fn new(length: NoteLength) -> Self {
        Self {
            length,
            revert: None,
            last_played: None,
        }
    }

    pub fn play_note(&mut self, note: NoteId, revert: RevertFn, audio: &mut dyn NoteTrigger) {
        self.revert = Some(revert);
        self.last_played = Some(note);
        audio.trigger(note, self.length);
    }

    /// Run and clear the pending revert, if any.
    pub fn on_key_up(&mut self, keyboard: &mut Keyboard) {
        if let Some(revert) = self.revert.take() {
            revert(keyboard);
        }
    }

    #[inline]
    pub fn has_pending_revert(&self) -> bool {
        self.revert.is_some()
    }

    #[inline]
    pub fn last_played(&self) -> Option<NoteId> {
        self.last_played
    }

    #[inline]
    pub fn length(&self) -> NoteLength {
        self.length
    }
}
