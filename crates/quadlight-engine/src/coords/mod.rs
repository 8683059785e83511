//! Coordinate and geometry types shared by the overlay and its hosts.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Layout space is the design document's coordinate system; device space is the pixel
//! grid of one viewport. `ViewportTransform` maps the former into the latter.

mod quad;
mod rect;
mod vec2;
mod viewport;

pub use quad::Quad;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::{ViewTransform, ViewportTransform};
