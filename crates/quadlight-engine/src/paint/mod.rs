//! Paint model shared between the overlay and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - blend modes recorded alongside textured draws
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// How a textured draw composites onto the target.
///
/// The overlay does not apply blending itself; it forwards the instance's mode to the
/// renderer through the draw stream.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Premultiplied source-over.
    #[default]
    Alpha,
    Additive,
}
