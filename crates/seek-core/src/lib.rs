pub mod config;
pub mod constants;
pub mod controls;
pub mod keymap;
pub mod motion;
pub mod scene;
pub mod state;
pub mod tuning;
pub static SHAPES_WGSL: &str = include_str!("../shaders/shapes.wgsl");

pub use config::*;
pub use constants::*;
pub use controls::*;
pub use keymap::*;
pub use motion::*;
pub use scene::*;
pub use state::*;
pub use tuning::*;
