use seek_core::Bounds;
use wasm_bindgen::JsCast;
use web_sys as web;

// Used when the host page does not provide its own canvas
const FALLBACK_CANVAS_STYLE: &str =
    "position:fixed;left:0;top:0;width:100vw;height:100vh;display:block;touch-action:none";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_or_create_canvas(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?;
            el.set_id(id);
            _ = el.set_attribute("style", FALLBACK_CANVAS_STYLE);
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
            log::info!("created #{}", id);
            el
        }
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Canvas size in CSS pixels, the unit the simulation runs in.
pub fn canvas_css_bounds(canvas: &web::HtmlCanvasElement) -> Bounds {
    let rect = canvas.get_bounding_client_rect();
    Bounds::new(rect.width() as f32, rect.height() as f32)
}

/// Backing pixels per CSS pixel, as currently applied to the canvas.
pub fn backing_scale(canvas: &web::HtmlCanvasElement) -> f64 {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    }
}
