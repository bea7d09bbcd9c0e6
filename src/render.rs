use crate::palette::{bold_font, css_hex, css_rgba, plain_font};
use seek_core::{
    rgba_from_hex, tint, Bounds, ButtonPanel, FrameOutput, BACKGROUND_COLOUR, BUTTON_COLOUR,
    BUTTON_PRESSED_COLOUR, BUTTON_PRESSED_SCALE, BUTTON_TEXT_COLOUR, BUTTON_TEXT_SIZE,
    MOVER_FILL_COLOUR, MOVER_HEIGHT, MOVER_STROKE_COLOUR, MOVER_STROKE_WIDTH, MOVER_WIDTH,
    STATUS_TEXT_COLOUR, STATUS_TEXT_ORIGIN, STATUS_TEXT_SIZE,
};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Draw one frame in CSS pixel units; `pixel_ratio` maps them onto the backing store.
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    bounds: Bounds,
    pixel_ratio: f64,
    frame: &FrameOutput,
    panel: &ButtonPanel,
    status: &str,
) -> Result<(), JsValue> {
    ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;

    ctx.set_fill_style_str(&css_hex(BACKGROUND_COLOUR));
    ctx.fill_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);

    draw_mover(ctx, frame)?;
    draw_buttons(ctx, panel)?;

    ctx.set_fill_style_str(&css_hex(STATUS_TEXT_COLOUR));
    ctx.set_font(&plain_font(STATUS_TEXT_SIZE));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(
        status,
        STATUS_TEXT_ORIGIN[0] as f64,
        STATUS_TEXT_ORIGIN[1] as f64,
    )?;
    Ok(())
}

fn draw_mover(ctx: &web::CanvasRenderingContext2d, frame: &FrameOutput) -> Result<(), JsValue> {
    let w = MOVER_WIDTH as f64;
    let h = MOVER_HEIGHT as f64;
    ctx.save();
    ctx.translate(frame.position.x as f64, frame.position.y as f64)?;
    ctx.rotate(frame.rotation as f64)?;
    ctx.set_fill_style_str(&css_hex(MOVER_FILL_COLOUR));
    ctx.fill_rect(-w * 0.5, -h * 0.5, w, h);
    ctx.set_stroke_style_str(&css_hex(MOVER_STROKE_COLOUR));
    ctx.set_line_width(MOVER_STROKE_WIDTH as f64);
    ctx.stroke_rect(-w * 0.5, -h * 0.5, w, h);
    ctx.restore();
    Ok(())
}

fn draw_buttons(ctx: &web::CanvasRenderingContext2d, panel: &ButtonPanel) -> Result<(), JsValue> {
    let base = rgba_from_hex(BUTTON_COLOUR);
    let pressed_fill = css_rgba(tint(base, rgba_from_hex(BUTTON_PRESSED_COLOUR)));
    let idle_fill = css_hex(BUTTON_COLOUR);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for (i, button) in panel.buttons().iter().enumerate() {
        let pressed = panel.is_pressed(i);
        let scale = if pressed { BUTTON_PRESSED_SCALE } else { 1.0 };
        let rect = button.rect.scaled_from_origin(scale);

        ctx.set_fill_style_str(if pressed { &pressed_fill } else { &idle_fill });
        ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );

        let centre = rect.centre();
        ctx.set_fill_style_str(&css_hex(BUTTON_TEXT_COLOUR));
        ctx.set_font(&bold_font(BUTTON_TEXT_SIZE * scale));
        ctx.fill_text(button.label, centre.x as f64, centre.y as f64)?;
    }
    Ok(())
}
