// Host-side tests for keyboard layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod note {
        include!("../src/core/note.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::layout::*;
use crate::core::note::*;
use std::collections::HashSet;

#[test]
fn every_octave_has_twelve_keys_seven_natural() {
    let kb = Keyboard::new();
    assert_eq!(kb.groups().len(), OCTAVES.len());
    for (i, group) in kb.groups().iter().enumerate() {
        assert_eq!(group.octave, OCTAVES[i]);
        let keys = kb.group_keys(i);
        assert_eq!(keys.len(), 12);
        assert_eq!(keys.iter().filter(|k| k.kind == KeyKind::Natural).count(), 7);
        assert!(keys.iter().all(|k| k.note.octave == group.octave));
    }
}

#[test]
fn accidentals_exist_except_after_e_and_b() {
    let kb = Keyboard::new();
    for octave in OCTAVES {
        for pitch in PitchClass::NATURALS {
            let natural = kb.get(NoteId::new(pitch, octave));
            assert!(natural.is_some(), "missing natural {}{}", pitch, octave);
            match pitch {
                PitchClass::E | PitchClass::B => assert!(pitch.sharp().is_none()),
                _ => {
                    let sharp = pitch.sharp().unwrap();
                    let key = kb.get(NoteId::new(sharp, octave)).unwrap();
                    assert_eq!(key.kind, KeyKind::Accidental);
                }
            }
        }
    }
    // Nothing on the keyboard is spelled E# or B#
    assert_eq!(
        kb.keys()
            .iter()
            .filter(|k| k.kind == KeyKind::Accidental)
            .count(),
        5 * OCTAVES.len()
    );
}

#[test]
fn note_ids_are_unique_and_complete() {
    let kb = Keyboard::new();
    let ids: HashSet<NoteId> = kb.keys().iter().map(|k| k.note).collect();
    assert_eq!(ids.len(), kb.len());
    assert_eq!(kb.len(), 12 * OCTAVES.len());
    for (i, key) in kb.keys().iter().enumerate() {
        assert_eq!(kb.index_of(key.note), Some(i));
    }
}

#[test]
fn naturals_run_left_to_right_in_pitch_order() {
    let kb = Keyboard::new();
    let naturals: Vec<&KeyShape> = kb
        .keys()
        .iter()
        .filter(|k| k.kind == KeyKind::Natural)
        .collect();
    for pair in naturals.windows(2) {
        assert!(pair[0].note < pair[1].note);
        assert!(pair[0].center.x < pair[1].center.x);
    }
    // Keys within the flat list ascend by pitch
    for pair in kb.keys().windows(2) {
        assert!(pair[0].note.midi() + 1 == pair[1].note.midi());
    }
}

#[test]
fn accidentals_sit_between_their_naturals_above_and_in_front() {
    let kb = Keyboard::new();
    for octave in OCTAVES {
        for pitch in PitchClass::NATURALS {
            let Some(sharp) = pitch.sharp() else { continue };
            let natural = kb.get(NoteId::new(pitch, octave)).unwrap();
            let acc = kb.get(NoteId::new(sharp, octave)).unwrap();
            let (n_min, n_max) = natural.bounds();
            let (a_min, a_max) = acc.bounds();
            // straddles the natural's right edge
            assert!(a_min.x < n_max.x && a_max.x > n_max.x);
            assert!(acc.center.y > natural.center.y);
            assert!(acc.center.z > natural.center.z);
            assert!(a_max.z > n_max.z);
            assert!(acc.size.y < natural.size.y);
            assert!(a_min.y > n_min.y);
        }
    }
}

#[test]
fn keyboard_is_centered() {
    let kb = Keyboard::new();
    let (lo, hi) = kb.keys().iter().fold((f32::MAX, f32::MIN), |(lo, hi), k| {
        let (min, max) = k.bounds();
        (lo.min(min.x), hi.max(max.x))
    });
    assert!((lo + hi).abs() < 1e-4, "lo={lo} hi={hi}");
}

#[test]
fn groups_are_spaced_by_seven_keys() {
    let params = LayoutParams::default();
    let kb = Keyboard::build(&params);
    let spacing = params.group_spacing();
    for pair in kb.groups().windows(2) {
        assert!((pair[1].offset_x - pair[0].offset_x - spacing).abs() < 1e-5);
    }
    // First natural of each group sits at the group offset
    for (i, group) in kb.groups().iter().enumerate() {
        let first = &kb.group_keys(i)[0];
        assert_eq!(first.note.pitch, PitchClass::C);
        assert!((first.center.x - group.offset_x).abs() < 1e-5);
    }
}

#[test]
fn keys_start_in_resting_colors() {
    let kb = Keyboard::new();
    for key in kb.keys() {
        assert_eq!(key.color, KeyColor::resting(key.kind));
        assert!(!key.is_active());
    }
}

#[test]
fn restore_uses_the_keys_own_kind() {
    let mut kb = Keyboard::new();
    let c4 = NoteId::new(PitchClass::C, 4);
    let cs4 = NoteId::new(PitchClass::CSharp, 4);
    assert!(kb.activate(c4));
    assert!(kb.activate(cs4));
    assert!(kb.get(c4).unwrap().is_active());
    kb.restore(cs4);
    assert_eq!(kb.get(cs4).unwrap().color, KeyColor::RestingAccidental);
    assert!(kb.get(c4).unwrap().is_active());
    kb.restore(c4);
    assert_eq!(kb.get(c4).unwrap().color, KeyColor::RestingNatural);
}

#[test]
fn unknown_notes_are_ignored() {
    let mut kb = Keyboard::new();
    let c7 = NoteId::new(PitchClass::C, 7);
    assert!(kb.get(c7).is_none());
    assert!(!kb.activate(c7));
    kb.restore(c7);
    kb.set_color(10_000, KeyColor::Active);
    assert!(kb.keys().iter().all(|k| !k.is_active()));
}

#[test]
fn custom_octave_range() {
    let params = LayoutParams {
        octaves: vec![4],
        ..LayoutParams::default()
    };
    let kb = Keyboard::build(&params);
    assert_eq!(kb.len(), 12);
    assert!(kb.group(1).is_none());
    assert!(kb.group_keys(1).is_empty());
}
