use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x, y)
}
