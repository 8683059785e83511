//! Capabilities the editor host provides to the overlay.
//!
//! The overlay never extends host types. It reads an instance and a view through
//! these narrow traits and records its output into a `DrawList`.

use quadlight_engine::coords::{Quad, Rect, Vec2, ViewportTransform};
use quadlight_engine::paint::{BlendMode, Color};
use quadlight_engine::scene::TextureId;

use crate::tracker::ObjectTypeId;

/// The viewport an instance is being drawn into.
pub trait LayoutView: ViewportTransform {
    /// Name of the layout this view displays; matched against pane captions.
    fn layout_name(&self) -> &str;

    /// Asks the host to schedule another redraw of this view.
    fn request_refresh(&self);
}

/// Load state of an instance's texture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextureState {
    Ready {
        texture: TextureId,
        /// Normalized region of the texture the instance samples.
        tex_rect: Rect,
    },
    /// Not loaded yet.
    Pending,
    /// Loading failed; the host will not retry on its own.
    Failed,
}

impl TextureState {
    #[inline]
    pub fn ready(texture: TextureId) -> Self {
        TextureState::Ready { texture, tex_rect: Rect::unit() }
    }

    #[inline]
    pub fn is_ready(self) -> bool {
        matches!(self, TextureState::Ready { .. })
    }

    #[inline]
    pub fn had_error(self) -> bool {
        matches!(self, TextureState::Failed)
    }
}

/// Pixel size of an object type's image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A placed object instance, as seen by the overlay.
pub trait InstanceHost {
    fn object_type(&self) -> ObjectTypeId;

    /// Current placement in layout space.
    fn quad(&self) -> Quad;

    fn texture(&self) -> TextureState;

    /// Configured tint, premultiplied.
    fn color(&self) -> Color {
        Color::white()
    }

    fn blend_mode(&self) -> BlendMode {
        BlendMode::Alpha
    }

    /// Image of the instance's object type, when the host knows it.
    fn image(&self) -> Option<ImageInfo> {
        None
    }

    /// Resizes the instance in layout pixels.
    fn set_size(&mut self, size: Vec2);
}
