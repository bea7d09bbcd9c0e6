// CSS colour strings for the Canvas 2D renderer.

/// `0xRRGGBB` -> `#rrggbb`.
#[inline]
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0xff_ffff)
}

/// `[r, g, b, a]` floats in 0..=1 -> `rgba(r, g, b, a)` with 0..=255 channels.
pub fn css_rgba(color: [f32; 4]) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        ch(color[0]),
        ch(color[1]),
        ch(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Bold font shorthand, e.g. `bold 18px sans-serif`.
#[inline]
pub fn bold_font(px: f32) -> String {
    format!("bold {}px sans-serif", px)
}

#[inline]
pub fn plain_font(px: f32) -> String {
    format!("{}px sans-serif", px)
}
