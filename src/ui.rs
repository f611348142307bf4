use crate::core::UiState;
use crate::dom;
use web_sys as web;

pub const OCTAVE_DISPLAY_ID: &str = "octave-display";
pub const NOTE_DISPLAY_ID: &str = "note-display";
pub const OCTAVE_DOWN_ID: &str = "octave-down";
pub const OCTAVE_UP_ID: &str = "octave-up";

/// Push octave, last note and button states to the page.
pub fn refresh(document: &web::Document, state: &UiState) {
    dom::set_text(document, OCTAVE_DISPLAY_ID, &format!("Octave: {}", state.octave));
    let note = match state.last_played {
        Some(n) => format!("Note: {}", n),
        None => "Note: -".to_string(),
    };
    dom::set_text(document, NOTE_DISPLAY_ID, &note);
    dom::set_disabled(document, OCTAVE_DOWN_ID, !state.can_octave_down);
    dom::set_disabled(document, OCTAVE_UP_ID, !state.can_octave_up);
}

pub fn refresh_current(state: &UiState) {
    if let Some(document) = dom::window_document() {
        refresh(&document, state);
    }
}
