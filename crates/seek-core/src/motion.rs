//! Per-tick seek motion for the single mover.
//!
//! The step is tick based: every call to [`Mover::advance`] is one frame and
//! no delta time is involved. Units are screen pixels and pixels per tick.

use crate::constants::TOP_SPEED;
use crate::tuning::TuningParameters;
use glam::Vec2;

/// Latest known pointer location in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget {
    pub x: f32,
    pub y: f32,
}

impl PointerTarget {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerTarget {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Size of the display surface. Only the wrap-around rule reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mover {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Display rotation in radians.
    pub rotation: f32,
}

impl Mover {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// A resting mover in the middle of `bounds`.
    pub fn centred(bounds: Bounds) -> Self {
        Self::new(bounds.centre())
    }

    /// Advance one tick toward `target` with the default speed limit.
    pub fn advance(&mut self, target: PointerTarget, params: &TuningParameters, bounds: Bounds) {
        self.advance_with_limit(target, params, bounds, TOP_SPEED);
    }

    /// Advance one tick toward `target`, clamping speed to `top_speed`.
    ///
    /// The heading angle is multiplied by `params.rotation_factor` rather than
    /// being used as a turn rate, so a factor of 2 doubles the drawn angle.
    pub fn advance_with_limit(
        &mut self,
        target: PointerTarget,
        params: &TuningParameters,
        bounds: Bounds,
        top_speed: f32,
    ) {
        // zero when sitting exactly on the target
        let direction = (target.as_vec2() - self.position).normalize_or_zero();

        self.acceleration = direction * params.accel_multiplier;
        self.velocity += self.acceleration;
        self.velocity = self.velocity.clamp_length_max(top_speed);
        self.position += self.velocity;

        let heading = self.velocity.y.atan2(self.velocity.x);
        self.rotation = heading * params.rotation_factor;

        self.position.x = wrap_axis(self.position.x, bounds.width);
        self.position.y = wrap_axis(self.position.y, bounds.height);
    }
}

/// Teleport a coordinate to the opposite edge once it leaves `0..=extent`.
///
/// Only strictly past an edge wraps: `extent` itself and `0.0` stay put.
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value > extent {
        0.0
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}
