use crate::coords::{Quad, Rect};
use crate::paint::{BlendMode, Color};
use crate::scene::{DrawCmd, DrawList, Layer};

/// Opaque handle to a texture owned by the host renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// Textured quad draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedQuadCmd {
    pub quad: Quad,
    pub texture: TextureId,
    /// Normalized texture coordinates sampled across the quad.
    pub tex_rect: Rect,
    /// Multiplied with the sampled texel.
    pub tint: Color,
    pub blend: BlendMode,
}

impl DrawList {
    /// Records a textured quad.
    #[inline]
    pub fn push_textured_quad(
        &mut self,
        layer: Layer,
        quad: Quad,
        texture: TextureId,
        tex_rect: Rect,
        tint: Color,
        blend: BlendMode,
    ) {
        self.push(
            layer,
            DrawCmd::TexturedQuad(TexturedQuadCmd { quad, texture, tex_rect, tint, blend }),
        );
    }
}
