pub(crate) mod quad;
pub(crate) mod textured_quad;

pub use quad::QuadCmd;
pub use textured_quad::{TextureId, TexturedQuadCmd};
