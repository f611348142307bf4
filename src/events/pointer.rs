use crate::audio::WebSynth;
use crate::camera::canvas_camera;
use crate::core::{drag_mode_for, DragMode, OrbitControls, Piano};
use crate::input;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub piano: Rc<RefCell<Piano>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub synth: Rc<RefCell<WebSynth>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_release(&w, "pointerup");
    wire_pointer_release(&w, "pointercancel");
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_touch_release(&w, "touchend");
    wire_touch_release(&w, "touchcancel");
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn refresh_ui(piano: &Rc<RefCell<Piano>>) {
    let state = piano.borrow().ui_state();
    ui::refresh_current(&state);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Touch contacts arrive through the touch handlers, one note per finger.
        if ev.pointer_type() == "touch" {
            return;
        }
        let Some(ndc) = input::pointer_ndc(&ev, &w.canvas) else {
            return;
        };
        let camera = canvas_camera(&w.canvas, &w.orbit.borrow());
        let played = {
            let mut synth = w.synth.borrow_mut();
            w.piano.borrow_mut().pointer_down(&camera, ndc, &mut *synth)
        };
        match played {
            Some(note) => {
                log::info!("[pointer] {}", note);
                refresh_ui(&w.piano);
            }
            // Presses off the keys move the view instead.
            None => {
                let modifier = ev.shift_key() || ev.ctrl_key() || ev.meta_key();
                let mode = drag_mode_for(ev.button(), modifier);
                w.orbit
                    .borrow_mut()
                    .begin_drag(mode, input::pointer_client_px(&ev));
                log::debug!("[pointer] begin {:?} drag", mode);
            }
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() == "touch" || !w.orbit.borrow().is_dragging() {
            return;
        }
        let height = input::canvas_css_height(&w.canvas);
        w.orbit
            .borrow_mut()
            .drag_to(input::pointer_client_px(&ev), height);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointer_release(w: &InputWiring, event: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() == "touch" {
            return;
        }
        if w.orbit.borrow_mut().end_drag() {
            log::debug!("[pointer] end drag");
        }
        w.piano.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Stops the browser from synthesizing mouse events for the same contact.
        ev.prevent_default();
        let points = input::changed_touches_ndc(&ev, &w.canvas);
        if points.is_empty() {
            return;
        }
        let camera = canvas_camera(&w.canvas, &w.orbit.borrow());
        let played = {
            let mut synth = w.synth.borrow_mut();
            w.piano
                .borrow_mut()
                .touch_start(&camera, &points, &mut *synth)
        };
        if !played.is_empty() {
            log::info!("[touch] {:?}", played.iter().map(|n| n.to_string()).collect::<Vec<_>>());
            refresh_ui(&w.piano);
        } else if ev.touches().length() == 1 {
            // A lone finger off the keys orbits.
            if let Some(pos) = input::first_touch_px(&ev) {
                w.orbit.borrow_mut().begin_drag(DragMode::Orbit, pos);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch_release(w: &InputWiring, event: &str) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        w.orbit.borrow_mut().end_drag();
        w.piano.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if !w.orbit.borrow().is_dragging() {
            return;
        }
        ev.prevent_default();
        // A second finger landing ends the orbit rather than jumping the view.
        if ev.touches().length() != 1 {
            w.orbit.borrow_mut().end_drag();
            return;
        }
        if let Some(pos) = input::first_touch_px(&ev) {
            let height = input::canvas_css_height(&w.canvas);
            w.orbit.borrow_mut().drag_to(pos, height);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.orbit.borrow_mut().zoom(input::wheel_delta_px(&ev));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right-drag pans, so the canvas gets no context menu.
fn wire_contextmenu(w: &InputWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
