//! Editor-side lifecycle of one overlay instance.
//!
//! Couples a host instance with its pointer [`Registration`] so that creating the
//! instance starts pointer tracking for its type and dropping it (on any path) stops
//! it. Also carries the editor conveniences tied to the type's image: original size
//! and double-tap editing.

use quadlight_engine::coords::Vec2;
use quadlight_engine::input::{PointerHub, PointerSource};
use quadlight_engine::scene::DrawList;

use crate::host::{InstanceHost, LayoutView};
use crate::renderer::{DrawParams, FrameReport, OverlayRenderer};
use crate::style::OverlayStyle;
use crate::tracker::{PointerRegistry, Registration};

/// Request an instance hands back to the editor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EditorRequest {
    /// Open the object type's image in the image editor.
    EditImage,
}

pub struct OverlayInstance<H: InstanceHost, S: PointerSource = PointerHub> {
    host: H,
    registration: Registration<S>,
    renderer: OverlayRenderer,
}

impl<H: InstanceHost, S: PointerSource> OverlayInstance<H, S> {
    /// Creates the instance and registers it with its type's pointer tracker.
    pub fn create(host: H, registry: &PointerRegistry<S>, style: OverlayStyle) -> Self {
        let registration = registry.register(host.object_type());
        log::debug!(
            "overlay instance created for {:?} ({} live)",
            registration.object_type(),
            registry.ref_count(registration.object_type())
        );

        Self { host, registration, renderer: OverlayRenderer::new(style) }
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    /// Absolute pointer position shared by every instance of this type.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.registration.position()
    }

    /// Per-frame entry point for the host's render loop.
    pub fn draw<V: LayoutView + ?Sized>(&self, params: &DrawParams<'_, V>, out: &mut DrawList) -> FrameReport {
        self.renderer.draw(&self.host, self.pointer(), params, out)
    }

    /// Size of the type's image, if known.
    pub fn original_size(&self) -> Option<Vec2> {
        self.host.image().map(|image| image.size())
    }

    /// Resizes the instance to its image size. Returns `false` without an image.
    pub fn make_original_size(&mut self) -> bool {
        match self.original_size() {
            Some(size) => {
                self.host.set_size(size);
                true
            }
            None => false,
        }
    }

    /// Called when the editor first places the instance in a layout.
    pub fn on_placed_in_layout(&mut self) {
        if !self.make_original_size() {
            log::debug!("placed instance has no image yet; keeping its size");
        }
    }

    pub fn on_double_tap(&self) -> EditorRequest {
        EditorRequest::EditImage
    }

    /// Stops pointer tracking for this instance and hands the host back.
    pub fn release(self) -> H {
        let OverlayInstance { host, registration, .. } = self;
        registration.release();
        host
    }
}

impl<H: InstanceHost + std::fmt::Debug, S: PointerSource> std::fmt::Debug for OverlayInstance<H, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayInstance")
            .field("host", &self.host)
            .field("registration", &self.registration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use quadlight_engine::coords::{Rect, ViewTransform};
    use quadlight_engine::input::PointerMoveEvent;

    use super::*;
    use crate::host::{ImageInfo, TextureState};
    use crate::pane::ViewportPane;
    use crate::testing::{TEST_TYPE, TestHost, TestView};

    fn host() -> TestHost {
        TestHost::new(Rect::new(0.0, 0.0, 32.0, 32.0), TextureState::Pending)
    }

    fn create(registry: &PointerRegistry) -> OverlayInstance<TestHost> {
        OverlayInstance::create(host(), registry, OverlayStyle::default())
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn instances_of_one_type_share_a_listener() {
        let registry = PointerRegistry::default();
        let a = create(&registry);
        let b = create(&registry);

        assert_eq!(registry.ref_count(TEST_TYPE), 2);
        assert_eq!(registry.with_source(|hub| hub.listener_count()), 1);

        drop(a);
        assert!(registry.is_listening(TEST_TYPE));
        b.release();
        assert!(!registry.is_listening(TEST_TYPE));
    }

    #[test]
    fn release_returns_the_host() {
        let registry = PointerRegistry::default();
        let mut inst = create(&registry);
        inst.host_mut().color = quadlight_engine::paint::Color::red();

        let host = inst.release();
        assert_eq!(host.color, quadlight_engine::paint::Color::red());
        assert_eq!(registry.ref_count(TEST_TYPE), 0);
    }

    #[test]
    fn pointer_follows_dispatched_events() {
        let registry = PointerRegistry::default();
        let a = create(&registry);
        let b = create(&registry);

        registry.dispatch(PointerMoveEvent::new(16.0, 16.0));
        assert_eq!(a.pointer(), Vec2::new(16.0, 16.0));
        assert_eq!(b.pointer(), Vec2::new(16.0, 16.0));
    }

    #[test]
    fn draw_uses_the_shared_pointer() {
        let registry = PointerRegistry::default();
        let inst = create(&registry);
        let view = TestView::new("Layout 1", ViewTransform::identity());
        let panes = vec![ViewportPane::new("Layout 1", Rect::new(100.0, 0.0, 300.0, 300.0))];
        let mut out = DrawList::new();

        registry.dispatch(PointerMoveEvent::new(110.0, 10.0));
        assert!(inst.draw(&DrawParams::new(&view, &panes), &mut out).highlighted);

        registry.dispatch(PointerMoveEvent::new(10.0, 10.0));
        out.clear();
        assert!(!inst.draw(&DrawParams::new(&view, &panes), &mut out).highlighted);
    }

    // ── image size ────────────────────────────────────────────────────────

    #[test]
    fn original_size_unknown_without_image() {
        let registry = PointerRegistry::default();
        let mut inst = create(&registry);

        assert_eq!(inst.original_size(), None);
        assert!(!inst.make_original_size());
        assert_eq!(inst.host().quad.bounding_rect().size, Vec2::new(32.0, 32.0));
    }

    #[test]
    fn placing_resizes_to_image() {
        let registry = PointerRegistry::default();
        let mut h = host();
        h.image = Some(ImageInfo::new(64, 48));
        let mut inst: OverlayInstance<TestHost> = OverlayInstance::create(h, &registry, OverlayStyle::default());

        inst.on_placed_in_layout();
        assert_eq!(inst.original_size(), Some(Vec2::new(64.0, 48.0)));
        assert_eq!(inst.host().quad.bounding_rect().size, Vec2::new(64.0, 48.0));
    }

    #[test]
    fn double_tap_requests_image_editing() {
        let registry = PointerRegistry::default();
        assert_eq!(create(&registry).on_double_tap(), EditorRequest::EditImage);
    }
}
