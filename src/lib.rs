#![cfg(target_arch = "wasm32")]
use crate::core::{LayoutParams, Piano};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

const CANVAS_ID: &str = "piano-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("piano-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Layout runs once, before any input handler is attached.
    let piano = Rc::new(RefCell::new(Piano::new(&LayoutParams::default())));
    log::info!(
        "[layout] {} keys in {} octaves",
        piano.borrow().keyboard().len(),
        piano.borrow().keyboard().groups().len()
    );

    let orbit = Rc::new(RefCell::new(camera::scene_orbit()));

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let synth = Rc::new(RefCell::new(audio::WebSynth::new(audio_ctx)?));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        piano: piano.clone(),
        orbit: orbit.clone(),
        synth: synth.clone(),
    });
    events::wire_global_keydown(events::KeyWiring {
        canvas: canvas.clone(),
        piano: piano.clone(),
        orbit: orbit.clone(),
        synth: synth.clone(),
    });
    events::wire_octave_buttons(&document, &piano);
    ui::refresh(&document, &piano.borrow().ui_state());

    // Input works even without WebGPU; only the picture is missing.
    let key_count = piano.borrow().keyboard().len();
    let gpu = frame::init_gpu(&canvas, key_count).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        piano,
        orbit,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
