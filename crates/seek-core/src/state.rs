//! Host-facing simulation state shared with the web and native frontends.
//!
//! A frontend owns one [`Simulation`], feeds it pointer positions, surface
//! size and tuning commands as they arrive, and calls [`Simulation::tick`]
//! once per frame. These types avoid platform-specific APIs so both targets
//! can drive them the same way.

use crate::config::{ConfigError, SeekConfig};
use crate::motion::{Bounds, Mover, PointerTarget};
use crate::tuning::{TuningCommand, TuningParameters};
use glam::Vec2;

/// What the presentation layer needs to draw the mover after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub position: Vec2,
    pub rotation: f32,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    mover: Mover,
    tuning: TuningParameters,
    target: PointerTarget,
    bounds: Bounds,
    top_speed: f32,
    ticks: u64,
}

impl Simulation {
    /// Mover and pointer target both start at the centre of `bounds`.
    pub fn new(config: SeekConfig, bounds: Bounds) -> Result<Self, ConfigError> {
        config.validate()?;
        let centre = bounds.centre();
        Ok(Self {
            mover: Mover::new(centre),
            tuning: config.tuning(),
            target: PointerTarget::from(centre),
            bounds,
            top_speed: config.top_speed,
            ticks: 0,
        })
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.target = PointerTarget::new(x, y);
    }

    /// Non-positive sizes (a minimised window) keep the previous bounds.
    pub fn resize(&mut self, bounds: Bounds) {
        if !(bounds.width > 0.0 && bounds.height > 0.0) {
            log::debug!("[sim] ignoring bounds {}x{}", bounds.width, bounds.height);
            return;
        }
        if bounds != self.bounds {
            log::debug!("[sim] bounds {}x{}", bounds.width, bounds.height);
            self.bounds = bounds;
        }
    }

    pub fn dispatch(&mut self, command: TuningCommand) {
        self.tuning.apply(command);
        log::info!("[tuning] {:?} -> {}", command, self.tuning.status_line());
    }

    pub fn tick(&mut self) -> FrameOutput {
        self.mover
            .advance_with_limit(self.target, &self.tuning, self.bounds, self.top_speed);
        self.ticks += 1;
        FrameOutput {
            position: self.mover.position,
            rotation: self.mover.rotation,
            speed: self.mover.velocity.length(),
        }
    }

    pub fn status_line(&self) -> String {
        self.tuning.status_line()
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn tuning(&self) -> &TuningParameters {
        &self.tuning
    }

    pub fn target(&self) -> PointerTarget {
        self.target
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
