use crate::coords::Quad;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Solid-filled quad draw payload (alpha blended, no texture).
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub quad: Quad,
    pub color: Color,
}

impl QuadCmd {
    #[inline]
    pub fn new(quad: Quad, color: Color) -> Self {
        Self { quad, color }
    }
}

impl DrawList {
    /// Records a solid quad fill.
    #[inline]
    pub fn push_solid_quad(&mut self, layer: Layer, quad: Quad, color: Color) {
        self.push(layer, DrawCmd::Quad(QuadCmd::new(quad, color)));
    }
}
