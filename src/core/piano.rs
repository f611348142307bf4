use super::camera::Camera;
use super::keymap::{OctaveSelector, OCTAVE_DOWN_KEY, OCTAVE_UP_KEY};
use super::layout::{Keyboard, LayoutParams};
use super::note::NoteId;
use super::picking::{pick, pick_all};
use super::player::{no_revert, restore_key, NoteLength, NotePlayer, NoteTrigger};
use glam::Vec2;
use smallvec::SmallVec;

/// Outcome of a physical key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Played(NoteId),
    OctaveChanged(i8),
    Ignored,
}

/// Snapshot of what the page shows next to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub octave: i8,
    pub last_played: Option<NoteId>,
    pub can_octave_down: bool,
    pub can_octave_up: bool,
}

/// Keyboard, playback and octave state driven by input events.
pub struct Piano {
    keyboard: Keyboard,
    player: NotePlayer,
    octave: OctaveSelector,
}

impl Default for Piano {
    fn default() -> Self {
        Self::new(&LayoutParams::default())
    }
}

impl Piano {
    pub fn new(params: &LayoutParams) -> Self {
        Self {
            keyboard: Keyboard::build(params),
            player: NotePlayer::new(NoteLength::Eighth),
            octave: OctaveSelector::new(params.octaves.clone()),
        }
    }

    #[inline]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[inline]
    pub fn player(&self) -> &NotePlayer {
        &self.player
    }

    #[inline]
    pub fn octave(&self) -> &OctaveSelector {
        &self.octave
    }

    /// Highlight the key first, then queue its revert and fire the sound.
    fn strike(&mut self, note: NoteId, audio: &mut dyn NoteTrigger) {
        self.keyboard.activate(note);
        self.player.play_note(note, restore_key(note), audio);
        log::debug!("[piano] play {}", note);
    }

    pub fn pointer_down(
        &mut self,
        camera: &Camera,
        ndc: Vec2,
        audio: &mut dyn NoteTrigger,
    ) -> Option<NoteId> {
        let note = pick(&self.keyboard, camera, ndc)?;
        self.strike(note, audio);
        Some(note)
    }

    /// One note per touch point that lands on a key.
    pub fn touch_start(
        &mut self,
        camera: &Camera,
        points: &[Vec2],
        audio: &mut dyn NoteTrigger,
    ) -> SmallVec<[NoteId; 4]> {
        let hits = pick_all(&self.keyboard, camera, points);
        let mut played = SmallVec::new();
        for hit in hits {
            self.strike(hit.note, audio);
            played.push(hit.note);
        }
        played
    }

    /// Pointer up, touch end and touch cancel.
    pub fn release(&mut self) {
        self.player.on_key_up(&mut self.keyboard);
    }

    pub fn key_down(&mut self, key: &str, audio: &mut dyn NoteTrigger) -> KeyAction {
        if key.eq_ignore_ascii_case(OCTAVE_DOWN_KEY) {
            return match self.octave_down() {
                true => KeyAction::OctaveChanged(self.octave.octave()),
                false => KeyAction::Ignored,
            };
        }
        if key.eq_ignore_ascii_case(OCTAVE_UP_KEY) {
            return match self.octave_up() {
                true => KeyAction::OctaveChanged(self.octave.octave()),
                false => KeyAction::Ignored,
            };
        }
        match self.octave.note_for_key(key) {
            Some(note) => {
                self.player.play_note(note, no_revert(), audio);
                log::debug!("[piano] key {} -> {}", key, note);
                KeyAction::Played(note)
            }
            None => KeyAction::Ignored,
        }
    }

    pub fn octave_up(&mut self) -> bool {
        let moved = self.octave.up();
        if moved {
            log::debug!("[piano] octave {}", self.octave.octave());
        }
        moved
    }

    pub fn octave_down(&mut self) -> bool {
        let moved = self.octave.down();
        if moved {
            log::debug!("[piano] octave {}", self.octave.octave());
        }
        moved
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            octave: self.octave.octave(),
            last_played: self.player.last_played(),
            can_octave_down: self.octave.can_down(),
            can_octave_up: self.octave.can_up(),
        }
    }
}
