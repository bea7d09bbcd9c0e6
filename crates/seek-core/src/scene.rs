//! Flat list of coloured, rotated rectangles describing one frame.
//!
//! The native renderer uploads these straight into an instance buffer; the
//! layout matches `ShapeInstance` in `shaders/shapes.wgsl`.

use crate::constants::{
    rgba_from_hex, BUTTON_COLOUR, BUTTON_PRESSED_COLOUR, BUTTON_PRESSED_SCALE, MOVER_FILL_COLOUR,
    MOVER_HEIGHT, MOVER_STROKE_COLOUR, MOVER_STROKE_WIDTH, MOVER_WIDTH,
};
use crate::controls::ButtonPanel;
use crate::state::FrameOutput;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    pub centre: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub rotation: f32,
    pub _pad: [f32; 3],
}

impl ShapeInstance {
    pub fn new(centre: [f32; 2], size: [f32; 2], color: [f32; 4], rotation: f32) -> Self {
        Self {
            centre,
            size,
            color,
            rotation,
            _pad: [0.0; 3],
        }
    }
}

/// Multiplicative tint, the way a pressed button darkens its base colour.
#[inline]
pub fn tint(base: [f32; 4], by: [f32; 4]) -> [f32; 4] {
    [base[0] * by[0], base[1] * by[1], base[2] * by[2], base[3] * by[3]]
}

/// Mover outline and fill first, then the buttons drawn over it.
pub fn build_shapes(frame: &FrameOutput, panel: &ButtonPanel) -> Vec<ShapeInstance> {
    let mut shapes = Vec::with_capacity(panel.buttons().len() + 2);

    // stroke straddles the edge: half outside, half inside the fill
    let centre = frame.position.to_array();
    let half = MOVER_STROKE_WIDTH * 0.5;
    shapes.push(ShapeInstance::new(
        centre,
        [MOVER_WIDTH + 2.0 * half, MOVER_HEIGHT + 2.0 * half],
        rgba_from_hex(MOVER_STROKE_COLOUR),
        frame.rotation,
    ));
    shapes.push(ShapeInstance::new(
        centre,
        [MOVER_WIDTH - 2.0 * half, MOVER_HEIGHT - 2.0 * half],
        rgba_from_hex(MOVER_FILL_COLOUR),
        frame.rotation,
    ));

    let base = rgba_from_hex(BUTTON_COLOUR);
    for (i, button) in panel.buttons().iter().enumerate() {
        let (rect, color) = if panel.is_pressed(i) {
            (
                button.rect.scaled_from_origin(BUTTON_PRESSED_SCALE),
                tint(base, rgba_from_hex(BUTTON_PRESSED_COLOUR)),
            )
        } else {
            (button.rect, base)
        };
        shapes.push(ShapeInstance::new(
            rect.centre().to_array(),
            [rect.width, rect.height],
            color,
            0.0,
        ));
    }
    shapes
}
