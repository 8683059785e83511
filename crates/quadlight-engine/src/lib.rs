//! Quadlight engine crate.
//!
//! Renderer-agnostic building blocks shared by the overlay and its hosts: geometry,
//! paint, the recorded draw stream, pointer input plumbing, and logging setup.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
