use crate::input;
use seek_core::{ButtonPanel, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
    pub panel: Rc<RefCell<ButtonPanel>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        w.sim.borrow_mut().set_pointer(pos.x, pos.y);
        w.panel.borrow_mut().pointer_move(pos);
    }) as Box<dyn FnMut(_)>);

    // Window-level so the target keeps tracking while a button is held off-canvas
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        if w.panel.borrow_mut().pointer_down(pos) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let fired = w.panel.borrow_mut().pointer_up(pos);
        if let Some(command) = fired {
            w.sim.borrow_mut().dispatch(command);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.panel.borrow_mut().pointer_out();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
