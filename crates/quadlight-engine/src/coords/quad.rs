use super::{Rect, Vec2};

/// Four-corner polygon, corners in clockwise screen order starting top-left.
///
/// The same type carries layout-space quads (instance placement) and device-space
/// quads (projected into one viewport). Which space a value lives in is decided by
/// whoever produced it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quad {
    pub tl: Vec2,
    pub tr: Vec2,
    pub br: Vec2,
    pub bl: Vec2,
}

impl Quad {
    #[inline]
    pub const fn new(tl: Vec2, tr: Vec2, br: Vec2, bl: Vec2) -> Self {
        Self { tl, tr, br, bl }
    }

    /// Axis-aligned quad covering `rect`.
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self {
            tl: min,
            tr: Vec2::new(max.x, min.y),
            br: max,
            bl: Vec2::new(min.x, max.y),
        }
    }

    /// Square of half-extent `half` centered on `center`.
    #[inline]
    pub fn centered_square(center: Vec2, half: f32) -> Self {
        Self {
            tl: Vec2::new(center.x - half, center.y - half),
            tr: Vec2::new(center.x + half, center.y - half),
            br: Vec2::new(center.x + half, center.y + half),
            bl: Vec2::new(center.x - half, center.y + half),
        }
    }

    /// Corners in `tl, tr, br, bl` order.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }

    /// Applies `f` to every corner independently.
    #[inline]
    pub fn map(self, mut f: impl FnMut(Vec2) -> Vec2) -> Self {
        Self {
            tl: f(self.tl),
            tr: f(self.tr),
            br: f(self.br),
            bl: f(self.bl),
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.tl + self.tr + self.br + self.bl) * 0.25
    }

    #[inline]
    pub fn rotated_about(self, pivot: Vec2, angle: f32) -> Self {
        self.map(|p| p.rotated_about(pivot, angle))
    }

    /// Smallest axis-aligned rectangle containing all four corners.
    pub fn bounding_rect(self) -> Rect {
        let min = self.tl.min(self.tr).min(self.br).min(self.bl);
        let max = self.tl.max(self.tr).max(self.br).max(self.bl);
        Rect::from_origin_size(min, max - min)
    }
}
