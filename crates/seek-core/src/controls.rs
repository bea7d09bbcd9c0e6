//! On-screen tuning buttons: layout, hit testing and press tracking.
//!
//! Frontends forward raw pointer events here and get back a
//! [`TuningCommand`] when a release lands on a button. Drawing stays with the
//! frontend; it only asks which button is currently held via
//! [`ButtonPanel::is_pressed`].

use crate::constants::{BUTTON_GROUP_ORIGIN, BUTTON_HEIGHT, BUTTON_MARGIN, BUTTON_WIDTH};
use crate::tuning::TuningCommand;
use glam::Vec2;

/// Axis-aligned rectangle in screen coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Scale about the top-left corner, as a pressed button shrinks.
    #[inline]
    pub fn scaled_from_origin(&self, factor: f32) -> Rect {
        Rect::new(self.x, self.y, self.width * factor, self.height * factor)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub command: TuningCommand,
}

#[derive(Clone, Debug)]
pub struct ButtonPanel {
    buttons: Vec<Button>,
    pressed: Option<usize>,
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::default_layout()
    }
}

impl ButtonPanel {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            buttons,
            pressed: None,
        }
    }

    /// Two-by-two grid: accel buttons on the first row, rotation on the second.
    pub fn default_layout() -> Self {
        let [ox, oy] = BUTTON_GROUP_ORIGIN;
        let col = BUTTON_WIDTH + BUTTON_MARGIN;
        let row = BUTTON_HEIGHT + BUTTON_MARGIN;
        let cells = [
            (TuningCommand::IncreaseAccel, 0.0, 0.0),
            (TuningCommand::DecreaseAccel, col, 0.0),
            (TuningCommand::IncreaseRotation, 0.0, row),
            (TuningCommand::DecreaseRotation, col, row),
        ];
        let buttons = cells
            .iter()
            .map(|&(command, dx, dy)| Button {
                label: command.label(),
                rect: Rect::new(ox + dx, oy + dy, BUTTON_WIDTH, BUTTON_HEIGHT),
                command,
            })
            .collect();
        Self::new(buttons)
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }

    /// Index of the topmost button under `p`.
    pub fn hit_test(&self, p: Vec2) -> Option<usize> {
        self.buttons.iter().rposition(|b| b.rect.contains(p))
    }

    /// Returns true when the press landed on a button.
    pub fn pointer_down(&mut self, p: Vec2) -> bool {
        self.pressed = self.hit_test(p);
        self.pressed.is_some()
    }

    /// Releasing over any button fires it, wherever the press started.
    pub fn pointer_up(&mut self, p: Vec2) -> Option<TuningCommand> {
        self.pressed = None;
        self.hit_test(p).map(|i| self.buttons[i].command)
    }

    /// Drops the pressed state once the pointer leaves the held button.
    pub fn pointer_move(&mut self, p: Vec2) {
        if let Some(i) = self.pressed {
            if !self.buttons[i].rect.contains(p) {
                self.pressed = None;
            }
        }
    }

    /// Pointer left the surface entirely.
    pub fn pointer_out(&mut self) {
        self.pressed = None;
    }
}
