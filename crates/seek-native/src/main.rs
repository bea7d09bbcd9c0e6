use std::time::{Duration, Instant};

use anyhow::Context;
use glam::Vec2;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::keyboard::{Key, NamedKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use seek_core::{
    build_shapes, command_for_key, Bounds, ButtonPanel, FrameOutput, SeekConfig, Simulation,
    KEY_HELP,
};

mod gpu;

const WINDOW_TITLE: &str = "Seek (native)";
const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Everything the event loop mutates besides the GPU state.
struct App {
    sim: Simulation,
    panel: ButtonPanel,
    scale_factor: f64,
    cursor: Option<Vec2>,
    shown_status: String,
    frames: u32,
    stats_since: Instant,
}

impl App {
    fn new(size: PhysicalSize<u32>, scale_factor: f64) -> anyhow::Result<Self> {
        let sim = Simulation::new(SeekConfig::default(), logical_bounds(size, scale_factor))
            .context("invalid seek config")?;
        Ok(Self {
            sim,
            panel: ButtonPanel::default_layout(),
            scale_factor,
            cursor: None,
            shown_status: String::new(),
            frames: 0,
            stats_since: Instant::now(),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.sim.resize(logical_bounds(size, self.scale_factor));
    }

    fn cursor_moved(&mut self, p: Vec2) {
        self.cursor = Some(p);
        self.sim.set_pointer(p.x, p.y);
        self.panel.pointer_move(p);
    }

    fn mouse_button(&mut self, state: ElementState) {
        let Some(p) = self.cursor else {
            return;
        };
        match state {
            ElementState::Pressed => {
                self.panel.pointer_down(p);
            }
            ElementState::Released => {
                if let Some(command) = self.panel.pointer_up(p) {
                    self.sim.dispatch(command);
                }
            }
        }
    }

    fn key(&mut self, key: &Key) {
        if let Some(command) = key_name(key).and_then(command_for_key) {
            self.sim.dispatch(command);
        }
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

fn logical_bounds(size: PhysicalSize<u32>, scale_factor: f64) -> Bounds {
    let logical: LogicalSize<f32> = size.to_logical(scale_factor);
    Bounds::new(logical.width, logical.height)
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(1024.0, 768.0))
        .build(&event_loop)
        .context("window")?;

    let mut state = pollster::block_on(gpu::GpuState::new(&window)).context("gpu")?;
    let mut app = App::new(window.inner_size(), window.scale_factor())?;
    log::info!("seek-native starting; {}", KEY_HELP);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                app.resize(size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                app.scale_factor = scale_factor;
                app.resize(state.window.inner_size());
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(app.scale_factor);
                app.cursor_moved(Vec2::new(p.x, p.y));
            }
            WindowEvent::CursorLeft { .. } => app.panel.pointer_out(),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => app.mouse_button(button_state),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                app.key(&event.logical_key);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            _ => {}
        },
        Event::AboutToWait => {
            let out = app.sim.tick();
            let status = app.sim.status_line();
            if status != app.shown_status {
                state.window.set_title(&format!("{WINDOW_TITLE}: {status}"));
                app.shown_status = status;
            }
            app.count_frame(&out);

            let bounds = app.sim.bounds();
            let shapes = build_shapes(&out, &app.panel);
            match state.render(&shapes, [bounds.width, bounds.height]) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("render error: out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
