// Shared tuning, layout and palette constants used by both web and native frontends.

// Motion
pub const TOP_SPEED: f32 = 6.0; // max mover speed, units per tick

// Tuning
pub const DEFAULT_ACCEL_MULTIPLIER: f32 = 0.5;
pub const DEFAULT_ROTATION_FACTOR: f32 = 1.0;
pub const TUNING_STEP: f32 = 0.2; // change per button press
pub const TUNING_FLOOR: f32 = 0.1; // decrements never go below this

// Mover shape (centred on its position)
pub const MOVER_WIDTH: f32 = 30.0;
pub const MOVER_HEIGHT: f32 = 10.0;
pub const MOVER_STROKE_WIDTH: f32 = 2.0;

// Button panel layout
pub const BUTTON_GROUP_ORIGIN: [f32; 2] = [20.0, 60.0];
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_MARGIN: f32 = 15.0; // gap between neighbouring buttons
pub const BUTTON_PRESSED_SCALE: f32 = 0.95;
pub const BUTTON_TEXT_SIZE: f32 = 18.0;

// Status text
pub const STATUS_TEXT_ORIGIN: [f32; 2] = [20.0, 20.0];
pub const STATUS_TEXT_SIZE: f32 = 20.0;

// Palette (0xRRGGBB)
pub const BACKGROUND_COLOUR: u32 = 0xbcbec2;
pub const MOVER_FILL_COLOUR: u32 = 0x7f7f7f;
pub const MOVER_STROKE_COLOUR: u32 = 0x000000;
pub const BUTTON_COLOUR: u32 = 0x8c8e91;
pub const BUTTON_PRESSED_COLOUR: u32 = 0x5c4cd7;
pub const BUTTON_TEXT_COLOUR: u32 = 0xffffff;
pub const STATUS_TEXT_COLOUR: u32 = 0x000000;

/// Split a packed `0xRRGGBB` colour into `[r, g, b, 1.0]` floats in `0.0..=1.0`.
#[inline]
pub fn rgba_from_hex(hex: u32) -> [f32; 4] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b, 1.0]
}
