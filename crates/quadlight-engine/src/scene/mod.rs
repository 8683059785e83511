//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (layer + insertion order)
//! - record which coordinate space each command is expressed in
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use layer::Layer;
pub use list::{CoordSpace, DrawItem, DrawList};
pub use shapes::{QuadCmd, TextureId, TexturedQuadCmd};
