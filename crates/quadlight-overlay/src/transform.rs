//! Layout → device and screen → pane-local conversions.

use quadlight_engine::coords::{Quad, Rect, Vec2, ViewportTransform};

/// Projects a layout-space quad into `viewport`'s device pixels.
///
/// Every corner is mapped on its own; rotated views and rotated quads stay correct.
#[inline]
pub fn layout_quad_to_device<V: ViewportTransform + ?Sized>(quad: Quad, viewport: &V) -> Quad {
    quad.map(|p| viewport.layout_to_device(p))
}

/// Converts an absolute screen position into coordinates local to `pane`.
///
/// With no pane the position is returned unchanged, so an unresolved pane degrades
/// to screen coordinates instead of failing.
#[inline]
pub fn screen_to_viewport_local(abs: Vec2, pane: Option<Rect>) -> Vec2 {
    match pane {
        Some(rect) => abs - rect.origin,
        None => abs,
    }
}
