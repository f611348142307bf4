use crate::audio::WebSynth;
use crate::core::{KeyAction, OrbitControls, Piano};
use crate::dom;
use crate::input;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct KeyWiring {
    pub canvas: web::HtmlCanvasElement,
    pub piano: Rc<RefCell<Piano>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub synth: Rc<RefCell<WebSynth>>,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    // Held keys auto-repeat; only the first keydown plays.
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let action = {
        let mut synth = w.synth.borrow_mut();
        w.piano.borrow_mut().key_down(&key, &mut *synth)
    };
    match action {
        KeyAction::Played(note) => log::info!("[keys] {} -> {}", key, note),
        KeyAction::OctaveChanged(octave) => log::info!("[keys] octave {}", octave),
        KeyAction::Ignored => {
            let height = input::canvas_css_height(&w.canvas);
            if w.orbit.borrow_mut().pan_key(&key, height) {
                ev.prevent_default();
            }
            return;
        }
    }
    ui::refresh_current(&w.piano.borrow().ui_state());
    ev.prevent_default();
}

pub fn wire_global_keydown(w: KeyWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Octave -/+ buttons next to the canvas.
pub fn wire_octave_buttons(document: &web::Document, piano: &Rc<RefCell<Piano>>) {
    let piano_down = piano.clone();
    dom::add_click_listener(document, ui::OCTAVE_DOWN_ID, move || {
        if piano_down.borrow_mut().octave_down() {
            ui::refresh_current(&piano_down.borrow().ui_state());
        }
    });
    let piano_up = piano.clone();
    dom::add_click_listener(document, ui::OCTAVE_UP_ID, move || {
        if piano_up.borrow_mut().octave_up() {
            ui::refresh_current(&piano_up.borrow().ui_state());
        }
    });
}
