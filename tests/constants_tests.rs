// Host-side tests for render and synth constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod player {
        include!("../src/core/player.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod note {
        include!("../src/core/note.rs");
    }
}

use crate::constants::*;
use crate::core::player::DEFAULT_BPM;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_looks_at_the_keyboard_from_the_front() {
    assert!(CAMERA_EYE[2] > 0.0);
    assert_ne!(CAMERA_EYE, CAMERA_TARGET);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY_RAD > 0.0 && CAMERA_FOVY_RAD < std::f32::consts::PI);
    // eye sits closer than the far plane
    let d: f32 = CAMERA_EYE
        .iter()
        .zip(CAMERA_TARGET)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        .sqrt();
    assert!(d < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn key_colors_are_distinct_and_normalized() {
    for rgba in [NATURAL_RGBA, ACCIDENTAL_RGBA, ACTIVE_RGBA] {
        assert!(rgba.iter().all(|c| (0.0..=1.0).contains(c)));
        assert_eq!(rgba[3], 1.0);
    }
    assert_ne!(NATURAL_RGBA, ACTIVE_RGBA);
    assert_ne!(ACCIDENTAL_RGBA, ACTIVE_RGBA);
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!((0.0..=1.0).contains(&AMBIENT_LEVEL));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn envelope_fits_inside_an_eighth_note() {
    assert!(SYNTH_ATTACK_SEC > 0.0 && SYNTH_DECAY_SEC > 0.0 && SYNTH_RELEASE_SEC > 0.0);
    assert!(SYNTH_SUSTAIN_LEVEL < SYNTH_PEAK_LEVEL);
    assert!(SYNTH_PEAK_LEVEL <= 1.0 && MASTER_GAIN <= 1.0);
    let eighth = 30.0 / DEFAULT_BPM as f64;
    assert!(SYNTH_ATTACK_SEC + SYNTH_DECAY_SEC < eighth);
}
