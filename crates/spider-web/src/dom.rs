use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas size in CSS pixels plus the device pixel ratio used for the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssSize {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Backing store pixels for a CSS size, never below 1x1.
#[inline]
pub fn backing_px(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}

pub fn css_size(canvas: &web::HtmlCanvasElement) -> CssSize {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    CssSize {
        width: rect.width(),
        height: rect.height(),
        dpr,
    }
}

/// Match the canvas backing size to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> CssSize {
    let size = css_size(canvas);
    let (w_px, h_px) = backing_px(size.width, size.height, size.dpr);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    size
}
