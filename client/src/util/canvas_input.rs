//! Canvas pointer mapping helpers.

#[cfg(feature = "hydrate")]
use canvas::geom::Point as CanvasPoint;
#[cfg(feature = "hydrate")]
use canvas::input::Button as CanvasButton;

#[cfg(feature = "hydrate")]
pub fn map_button(button: i16) -> CanvasButton {
    CanvasButton::from_dom(button)
}

/// On-screen box of the canvas element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client-space position onto a `surface_width` x `surface_height`
/// drawing surface shown inside `rect`.
///
/// A collapsed rect maps by offset alone.
pub fn client_to_surface(
    client_x: f64,
    client_y: f64,
    rect: ScreenRect,
    surface_width: f64,
    surface_height: f64,
) -> (f64, f64) {
    let scale_x = if rect.width > 0.0 { surface_width / rect.width } else { 1.0 };
    let scale_y = if rect.height > 0.0 { surface_height / rect.height } else { 1.0 };
    ((client_x - rect.left) * scale_x, (client_y - rect.top) * scale_y)
}

/// Pointer position in canvas surface pixels, correct when CSS resizes the
/// canvas element.
#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent, element: &web_sys::HtmlCanvasElement) -> CanvasPoint {
    let rect = element.get_bounding_client_rect();
    let screen = ScreenRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    let (x, y) = client_to_surface(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        screen,
        f64::from(element.width()),
        f64::from(element.height()),
    );
    CanvasPoint::new(x, y)
}

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod tests;
