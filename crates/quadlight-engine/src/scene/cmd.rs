use crate::scene::shapes::quad::QuadCmd;
use crate::scene::shapes::textured_quad::TexturedQuadCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Quad(QuadCmd),
    TexturedQuad(TexturedQuadCmd),
}

impl DrawCmd {
    /// Fill/tint color of the command.
    #[inline]
    pub fn color(&self) -> crate::paint::Color {
        match self {
            DrawCmd::Quad(c) => c.color,
            DrawCmd::TexturedQuad(c) => c.tint,
        }
    }

    /// Geometry of the command, in the coordinate space of its draw item.
    #[inline]
    pub fn quad(&self) -> crate::coords::Quad {
        match self {
            DrawCmd::Quad(c) => c.quad,
            DrawCmd::TexturedQuad(c) => c.quad,
        }
    }
}
