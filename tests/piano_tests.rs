// Host-side tests for note playback, octave selection and the piano controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod keymap {
        include!("../src/core/keymap.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod note {
        include!("../src/core/note.rs");
    }
    pub mod piano {
        include!("../src/core/piano.rs");
    }
    pub mod picking {
        include!("../src/core/picking.rs");
    }
    pub mod player {
        include!("../src/core/player.rs");
    }
}

use crate::constants::*;
use crate::core::camera::*;
use crate::core::keymap::*;
use crate::core::layout::*;
use crate::core::note::*;
use crate::core::piano::*;
use crate::core::player::*;
use glam::{Vec2, Vec3};

#[derive(Default)]
struct Recorder {
    played: Vec<(String, &'static str)>,
}

impl NoteTrigger for Recorder {
    fn trigger(&mut self, note: NoteId, length: NoteLength) {
        self.played.push((note.to_string(), length.token()));
    }
}

impl Recorder {
    fn names(&self) -> Vec<&str> {
        self.played.iter().map(|(n, _)| n.as_str()).collect()
    }
}

fn note(s: &str) -> NoteId {
    s.parse().unwrap()
}

fn scene_camera() -> Camera {
    Camera {
        eye: Vec3::from(CAMERA_EYE),
        target: Vec3::from(CAMERA_TARGET),
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: CAMERA_FOVY_RAD,
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

// Lower front face of a natural, or the front face of an accidental.
fn ndc_for(piano: &Piano, cam: &Camera, n: NoteId) -> Vec2 {
    let key = piano.keyboard().get(n).unwrap();
    let mut p = key.center + Vec3::new(0.0, 0.0, key.size.z * 0.5);
    if key.kind == KeyKind::Natural {
        p.y -= key.size.y * 0.3;
    }
    cam.project(p)
}

// ---------------- NoteLength / NotePlayer ----------------

#[test]
fn eighth_note_at_default_tempo() {
    assert_eq!(NoteLength::Eighth.token(), "8n");
    assert!((NoteLength::Eighth.seconds(DEFAULT_BPM) - 0.25).abs() < 1e-6);
    assert!((NoteLength::Quarter.seconds(60.0) - 1.0).abs() < 1e-6);
}

#[test]
fn play_note_always_fires_with_eighth_length() {
    let mut player = NotePlayer::default();
    let mut audio = Recorder::default();
    player.play_note(note("C4"), no_revert(), &mut audio);
    player.play_note(note("C4"), no_revert(), &mut audio);
    assert_eq!(
        audio.played,
        vec![("C4".to_string(), "8n"), ("C4".to_string(), "8n")]
    );
    assert_eq!(player.last_played(), Some(note("C4")));
}

#[test]
fn key_up_restores_resting_color_for_kind() {
    for (name, resting) in [
        ("C4", KeyColor::RestingNatural),
        ("C#4", KeyColor::RestingAccidental),
    ] {
        let mut kb = Keyboard::new();
        let mut player = NotePlayer::default();
        let mut audio = Recorder::default();
        assert!(kb.activate(note(name)));
        player.play_note(note(name), restore_key(note(name)), &mut audio);
        player.on_key_up(&mut kb);
        assert_eq!(kb.get(note(name)).unwrap().color, resting);
    }
}

#[test]
fn key_up_runs_revert_once() {
    let mut kb = Keyboard::new();
    let mut player = NotePlayer::default();
    let mut audio = Recorder::default();
    kb.activate(note("D3"));
    player.play_note(note("D3"), restore_key(note("D3")), &mut audio);
    assert!(player.has_pending_revert());
    player.on_key_up(&mut kb);
    assert!(!player.has_pending_revert());
    // a later highlight is left alone by a stray second release
    kb.activate(note("D3"));
    player.on_key_up(&mut kb);
    assert!(kb.get(note("D3")).unwrap().is_active());
}

#[test]
fn overlapping_presses_keep_only_the_latest_revert() {
    let mut kb = Keyboard::new();
    let mut player = NotePlayer::default();
    let mut audio = Recorder::default();
    kb.activate(note("C4"));
    player.play_note(note("C4"), restore_key(note("C4")), &mut audio);
    kb.activate(note("E4"));
    player.play_note(note("E4"), restore_key(note("E4")), &mut audio);
    player.on_key_up(&mut kb);
    assert!(!kb.get(note("E4")).unwrap().is_active());
    assert!(kb.get(note("C4")).unwrap().is_active());
}

// ---------------- Key map / octave selector ----------------

#[test]
fn key_map_is_a_chromatic_run_from_a() {
    let pitches: Vec<_> = KEY_MAP
        .iter()
        .filter(|(_, _, shift)| *shift == 0)
        .map(|(_, p, _)| *p)
        .collect();
    assert_eq!(pitches, PitchClass::ALL.to_vec());
    assert_eq!(pitch_for_key("a"), Some((PitchClass::C, 0)));
    assert_eq!(pitch_for_key("A"), Some((PitchClass::C, 0)));
    assert_eq!(pitch_for_key("k"), Some((PitchClass::C, 1)));
    assert_eq!(pitch_for_key("q"), None);
    assert_eq!(pitch_for_key(OCTAVE_UP_KEY), None);
    assert_eq!(pitch_for_key(OCTAVE_DOWN_KEY), None);
}

#[test]
fn key_map_has_no_duplicate_keys() {
    for (i, (k, _, _)) in KEY_MAP.iter().enumerate() {
        assert!(KEY_MAP[i + 1..].iter().all(|(other, _, _)| other != k));
    }
}

#[test]
fn octave_selector_clamps_at_both_ends() {
    let mut sel = OctaveSelector::default();
    assert_eq!(sel.index(), 0);
    assert_eq!(sel.octave(), 2);
    assert!(!sel.can_down());
    assert!(!sel.down());
    assert_eq!(sel.index(), 0);

    for _ in 0..OCTAVES.len() - 1 {
        assert!(sel.up());
    }
    assert_eq!(sel.octave(), 5);
    assert!(!sel.can_up());
    assert!(!sel.up());
    assert_eq!(sel.index(), OCTAVES.len() - 1);
}

#[test]
fn shifted_keys_past_the_top_octave_resolve_to_nothing() {
    let mut sel = OctaveSelector::default();
    assert_eq!(sel.note_for_key("k"), Some(note("C3")));
    while sel.up() {}
    assert_eq!(sel.note_for_key("j"), Some(note("B5")));
    assert_eq!(sel.note_for_key("k"), None);
}

// ---------------- Piano controller ----------------

#[test]
fn physical_keys_play_at_current_octave() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    assert_eq!(piano.key_down("a", &mut audio), KeyAction::Played(note("C2")));
    assert_eq!(piano.key_down("x", &mut audio), KeyAction::OctaveChanged(3));
    assert_eq!(piano.key_down("a", &mut audio), KeyAction::Played(note("C3")));
    assert_eq!(audio.names(), vec!["C2", "C3"]);
}

#[test]
fn octave_keys_are_noops_at_the_bounds() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    assert_eq!(piano.key_down("z", &mut audio), KeyAction::Ignored);
    assert_eq!(piano.octave().index(), 0);
    for _ in 0..3 {
        piano.key_down("X", &mut audio);
    }
    assert_eq!(piano.octave().octave(), 5);
    assert_eq!(piano.key_down("x", &mut audio), KeyAction::Ignored);
    assert_eq!(piano.octave().octave(), 5);
    assert!(audio.played.is_empty());
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    assert_eq!(piano.key_down("Enter", &mut audio), KeyAction::Ignored);
    assert_eq!(piano.key_down("1", &mut audio), KeyAction::Ignored);
    assert!(audio.played.is_empty());
    assert_eq!(piano.ui_state().last_played, None);
}

#[test]
fn keyboard_input_does_not_recolor_keys() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    piano.key_down("a", &mut audio);
    assert!(piano.keyboard().keys().iter().all(|k| !k.is_active()));
    piano.release();
    assert!(piano.keyboard().keys().iter().all(|k| !k.is_active()));
}

#[test]
fn pointer_press_highlights_then_release_restores() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    let cam = scene_camera();
    let c4 = note("C4");
    let played = piano.pointer_down(&cam, ndc_for(&piano, &cam, c4), &mut audio);
    assert_eq!(played, Some(c4));
    assert!(piano.keyboard().get(c4).unwrap().is_active());
    assert_eq!(audio.names(), vec!["C4"]);
    piano.release();
    assert_eq!(
        piano.keyboard().get(c4).unwrap().color,
        KeyColor::RestingNatural
    );
}

#[test]
fn pointer_miss_is_a_noop() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    let cam = scene_camera();
    assert_eq!(piano.pointer_down(&cam, Vec2::new(0.99, 0.99), &mut audio), None);
    assert!(audio.played.is_empty());
    assert!(!piano.player().has_pending_revert());
    piano.release();
}

#[test]
fn multi_touch_plays_one_note_per_contact() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    let cam = scene_camera();
    let points = [
        ndc_for(&piano, &cam, note("C3")),
        ndc_for(&piano, &cam, note("G#4")),
        Vec2::new(-0.99, -0.99),
    ];
    let played = piano.touch_start(&cam, &points, &mut audio);
    assert_eq!(played.as_slice(), &[note("C3"), note("G#4")]);
    assert_eq!(audio.names(), vec!["C3", "G#4"]);
    assert!(piano.keyboard().get(note("C3")).unwrap().is_active());
    assert!(piano.keyboard().get(note("G#4")).unwrap().is_active());
    // Single revert slot: only the last contact is restored on release.
    piano.release();
    assert!(!piano.keyboard().get(note("G#4")).unwrap().is_active());
    assert!(piano.keyboard().get(note("C3")).unwrap().is_active());
}

#[test]
fn ui_state_tracks_octave_and_last_note() {
    let mut piano = Piano::default();
    let mut audio = Recorder::default();
    let ui = piano.ui_state();
    assert_eq!(ui.octave, 2);
    assert!(!ui.can_octave_down);
    assert!(ui.can_octave_up);
    assert!(piano.octave_up());
    piano.key_down("h", &mut audio);
    let ui = piano.ui_state();
    assert_eq!(ui.octave, 3);
    assert_eq!(ui.last_played, Some(note("A3")));
    assert!(ui.can_octave_down);
    while piano.octave_up() {}
    assert!(!piano.ui_state().can_octave_up);
    assert!(!piano.octave_up());
}
