#![cfg(target_arch = "wasm32")]
use instant::Instant;
use seek_core::{ButtonPanel, SeekConfig, Simulation, KEY_HELP};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod palette;
mod render;

const CANVAS_ID: &str = "app-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
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
    log::info!("seek-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_or_create_canvas(&document, CANVAS_ID)?;

    // Backing store follows CSS size * devicePixelRatio; simulation works in CSS pixels
    dom::sync_canvas_backing_size(&canvas);
    wire_canvas_resize(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let bounds = dom::canvas_css_bounds(&canvas);
    let sim = Rc::new(RefCell::new(Simulation::new(SeekConfig::default(), bounds)?));
    let panel = Rc::new(RefCell::new(ButtonPanel::default_layout()));
    log::info!(
        "[sim] bounds {}x{} {}",
        bounds.width,
        bounds.height,
        sim.borrow().status_line()
    );
    log::info!("[keys] {}", KEY_HELP);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
        panel: panel.clone(),
    });
    events::wire_global_keydown(sim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        panel,
        canvas,
        ctx,
        frames: 0,
        stats_since: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
