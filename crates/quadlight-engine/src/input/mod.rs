//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; the runtime
//! translates platform events through `platform::winit` and feeds them to a
//! [`PointerHub`].

pub mod platform;

mod source;
mod types;

pub use source::{ListenerId, PointerHub, PointerListener, PointerSource};
pub use types::PointerMoveEvent;
