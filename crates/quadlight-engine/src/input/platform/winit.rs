use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;

use crate::input::PointerMoveEvent;

/// Translates a winit `WindowEvent` into a pointer move.
///
/// Returns `None` for events the pointer pipeline does not consume. `CursorLeft` is one
/// of them: the last known position stays in effect, matching a pointer that simply
/// stopped producing move events.
pub fn translate_window_event(event: &WindowEvent, scale_factor: f64) -> Option<PointerMoveEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(translate_cursor_moved(*position, scale_factor)),
        _ => None,
    }
}

/// Converts a physical cursor position into a logical-pixel pointer move.
pub fn translate_cursor_moved(position: PhysicalPosition<f64>, scale_factor: f64) -> PointerMoveEvent {
    let (x, y) = to_logical_f32(position, scale_factor);
    PointerMoveEvent { x, y }
}

fn to_logical_f32(pos: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    // winit panics on non-normal scale factors.
    let scale = if scale_factor.is_normal() && scale_factor > 0.0 { scale_factor } else { 1.0 };
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}
