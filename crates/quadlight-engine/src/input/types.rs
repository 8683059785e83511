/// Pointer move event in absolute logical screen pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerMoveEvent {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(self) -> crate::coords::Vec2 {
        crate::coords::Vec2::new(self.x, self.y)
    }
}
