//! Test doubles for the host capability traits.

use std::cell::Cell;

use quadlight_engine::coords::{Quad, Rect, Vec2, ViewTransform, ViewportTransform};
use quadlight_engine::paint::{BlendMode, Color};

use crate::host::{ImageInfo, InstanceHost, LayoutView, TextureState};
use crate::tracker::ObjectTypeId;

pub(crate) const TEST_TYPE: ObjectTypeId = ObjectTypeId(42);

#[derive(Debug, Clone)]
pub(crate) struct TestHost {
    pub quad: Quad,
    pub texture: TextureState,
    pub color: Color,
    pub blend: BlendMode,
    pub image: Option<ImageInfo>,
    /// Number of `quad()` calls so far.
    pub quad_reads: Cell<u32>,
}

impl TestHost {
    pub fn new(rect: Rect, texture: TextureState) -> Self {
        Self {
            quad: Quad::from_rect(rect),
            texture,
            color: Color::white(),
            blend: BlendMode::Alpha,
            image: None,
            quad_reads: Cell::new(0),
        }
    }
}

impl InstanceHost for TestHost {
    fn object_type(&self) -> ObjectTypeId {
        TEST_TYPE
    }

    fn quad(&self) -> Quad {
        self.quad_reads.set(self.quad_reads.get() + 1);
        self.quad
    }

    fn texture(&self) -> TextureState {
        self.texture
    }

    fn color(&self) -> Color {
        self.color
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    fn set_size(&mut self, size: Vec2) {
        let origin = self.quad.tl;
        self.quad = Quad::from_rect(Rect::from_origin_size(origin, size));
    }
}

pub(crate) struct TestView {
    name: String,
    transform: ViewTransform,
    refreshes: Cell<u32>,
}

impl TestView {
    pub fn new(name: &str, transform: ViewTransform) -> Self {
        Self { name: name.to_string(), transform, refreshes: Cell::new(0) }
    }

    pub fn refreshes(&self) -> u32 {
        self.refreshes.get()
    }
}

impl ViewportTransform for TestView {
    fn layout_to_device(&self, p: Vec2) -> Vec2 {
        self.transform.layout_to_device(p)
    }
}

impl LayoutView for TestView {
    fn layout_name(&self) -> &str {
        &self.name
    }

    fn request_refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }
}
