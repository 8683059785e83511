use super::Vec2;

/// Layout-space → device-pixel mapping of one viewport.
///
/// Implementations may pan, zoom and rotate; callers must map every point they need
/// rather than assuming the mapping preserves axis alignment.
pub trait ViewportTransform {
    fn layout_to_device(&self, p: Vec2) -> Vec2;
}

/// Pan/zoom/rotate camera for a viewport.
///
/// `device = device_origin + rotate((p - scroll) * zoom, angle)`
///
/// - `scroll`: layout point that lands on `device_origin`
/// - `zoom`: device pixels per layout pixel
/// - `angle`: view rotation in radians
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub scroll: Vec2,
    pub zoom: f32,
    pub angle: f32,
    pub device_origin: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scroll: Vec2::zero(),
            zoom: 1.0,
            angle: 0.0,
            device_origin: Vec2::zero(),
        }
    }
}

impl ViewTransform {
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }

    /// `zoom` is clamped to `[0.05, 32.0]`.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = if zoom.is_finite() { zoom.clamp(0.05, 32.0) } else { 1.0 };
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_device_origin(mut self, origin: Vec2) -> Self {
        self.device_origin = origin;
        self
    }
}

impl ViewportTransform for ViewTransform {
    #[inline]
    fn layout_to_device(&self, p: Vec2) -> Vec2 {
        self.device_origin + ((p - self.scroll) * self.zoom).rotated(self.angle)
    }
}
