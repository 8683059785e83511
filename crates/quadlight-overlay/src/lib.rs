//! Quadlight overlay: editor-time hover highlighting for placed objects.
//!
//! Each frame, for each instance:
//!
//! 1. read the pointer position shared by the instance's object type ([`tracker`]),
//! 2. find the pane showing the instance's layout and localize the pointer ([`pane`],
//!    [`transform`]),
//! 3. project the instance quad into that pane's device pixels ([`transform`]),
//! 4. hit test ([`hit`]),
//! 5. record the instance and a pointer marker into a `DrawList` and ask for the next
//!    frame ([`renderer`]).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use quadlight_overlay::prelude::*;
//!
//! let registry = PointerRegistry::default();
//! let sprite = OverlayInstance::create(my_host, &registry, OverlayStyle::default());
//!
//! // Platform pointer moves:
//! registry.dispatch(PointerMoveEvent::new(x, y));
//!
//! // In the render loop:
//! let report = sprite.draw(&DrawParams::new(&view, &panes), &mut draw_list);
//! ```
//!
//! Everything is single-threaded: pointer events and draws run one at a time on the
//! thread that owns the registry.

pub mod hit;
pub mod host;
pub mod instance;
pub mod pane;
pub mod renderer;
pub mod style;
pub mod tracker;
pub mod transform;

#[cfg(test)]
mod testing;

/// Everything a host needs to embed the overlay.
pub mod prelude {
    pub use crate::hit::{point_in_polygon, point_in_quad};
    pub use crate::host::{ImageInfo, InstanceHost, LayoutView, TextureState};
    pub use crate::instance::{EditorRequest, OverlayInstance};
    pub use crate::pane::{PaneDirectory, ViewportPane, resolve_pane};
    pub use crate::renderer::{DrawParams, FrameReport, OverlayRenderer};
    pub use crate::style::OverlayStyle;
    pub use crate::tracker::{ObjectTypeId, PointerRegistry, PointerTracker, Registration};
    pub use crate::transform::{layout_quad_to_device, screen_to_viewport_local};

    // Re-export the engine primitives everyone needs.
    pub use quadlight_engine::coords::{Quad, Rect, Vec2, ViewTransform, ViewportTransform};
    pub use quadlight_engine::input::{PointerHub, PointerMoveEvent, PointerSource};
    pub use quadlight_engine::paint::{BlendMode, Color};
    pub use quadlight_engine::scene::{CoordSpace, DrawCmd, DrawList, Layer, TextureId};
}
