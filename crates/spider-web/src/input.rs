use glam::Vec2;
use web_sys as web;

/// Client coordinates relative to the top-left of a rect, in CSS pixels.
#[inline]
pub fn client_to_surface(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_surface_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}
