use crate::dom;
use crate::render;
use instant::{Duration, Instant};
use seek_core::{ButtonPanel, FrameOutput, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub panel: Rc<RefCell<ButtonPanel>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub frames: u32,
    pub stats_since: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let bounds = dom::canvas_css_bounds(&self.canvas);
        let (out, status) = {
            let mut sim = self.sim.borrow_mut();
            sim.resize(bounds);
            (sim.tick(), sim.status_line())
        };

        let panel = self.panel.borrow();
        let pixel_ratio = dom::backing_scale(&self.canvas);
        if let Err(e) = render::draw_scene(&self.ctx, bounds, pixel_ratio, &out, &panel, &status) {
            log::error!("render error: {:?}", e);
        }
        drop(panel);

        self.count_frame(&out);
    }

    fn count_frame(&mut self, out: &FrameOutput) {
        self.frames += 1;
        let elapsed = self.stats_since.elapsed();
        if elapsed >= STATS_INTERVAL {
            log::debug!(
                "[frame] {:.1} fps pos=({:.1},{:.1}) speed={:.2}",
                self.frames as f32 / elapsed.as_secs_f32(),
                out.position.x,
                out.position.y,
                out.speed
            );
            self.frames = 0;
            self.stats_since = Instant::now();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
