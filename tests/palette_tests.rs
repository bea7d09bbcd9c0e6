// Host-side tests for CSS colour helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod palette {
    include!("../src/palette.rs");
}

use palette::*;

#[test]
fn css_hex_pads_to_six_digits() {
    assert_eq!(css_hex(0xbcbec2), "#bcbec2");
    assert_eq!(css_hex(0x000000), "#000000");
    assert_eq!(css_hex(0x00ff0a), "#00ff0a");
    // anything above 24 bits is ignored
    assert_eq!(css_hex(0xff_123456), "#123456");
}

#[test]
fn css_rgba_rounds_and_clamps_channels() {
    assert_eq!(css_rgba([1.0, 0.5, 0.0, 1.0]), "rgba(255, 128, 0, 1)");
    assert_eq!(css_rgba([2.0, -1.0, 0.2, 0.5]), "rgba(255, 0, 51, 0.5)");
}

#[test]
fn font_shorthands() {
    assert_eq!(bold_font(18.0), "bold 18px sans-serif");
    assert_eq!(plain_font(20.0), "20px sans-serif");
}
