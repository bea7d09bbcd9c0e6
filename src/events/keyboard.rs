use seek_core::{command_for_key, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, sim: &Rc<RefCell<Simulation>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(command) = command_for_key(&key) {
        sim.borrow_mut().dispatch(command);
        // keep arrows from scrolling the page
        if key.starts_with("Arrow") {
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(sim: Rc<RefCell<Simulation>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &sim);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
