use crate::core::ndc_from_pixels;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
fn client_to_ndc(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    ndc_from_pixels(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Pointer position in CSS pixels relative to the viewport, for drag deltas.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, canvas)
}

/// NDC for every touch that changed in this event.
pub fn changed_touches_ndc(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Vec<Vec2> {
    let touches = ev.changed_touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .filter_map(|t| client_to_ndc(t.client_x() as f32, t.client_y() as f32, canvas))
        .collect()
}

/// Client position of the first touch still on the surface.
pub fn first_touch_px(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Wheel delta in pixels; line and page deltas are scaled up.
pub fn wheel_delta_px(ev: &web::WheelEvent) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => dy * 16.0,
        web::WheelEvent::DOM_DELTA_PAGE => dy * 100.0,
        _ => dy,
    }
}

/// CSS height of the canvas; drag deltas are measured against it.
#[inline]
pub fn canvas_css_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

/// Canvas aspect ratio from its backing store size.
#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
