//! Per-frame overlay drawing.
//!
//! One `draw` call runs the whole pipeline: localize the pointer to the instance's
//! pane, project the instance quad into device space, hit test, then record the
//! instance (textured or placeholder) and the pointer marker into a `DrawList`.
//! Nothing is cached between calls; pan, zoom and pane layout can change between
//! any two frames.

use quadlight_engine::coords::{Quad, Rect, Vec2};
use quadlight_engine::scene::{CoordSpace, DrawList, Layer};

use crate::hit::point_in_quad;
use crate::host::{InstanceHost, LayoutView, TextureState};
use crate::pane::{ViewportPane, resolve_pane};
use crate::style::OverlayStyle;
use crate::transform::{layout_quad_to_device, screen_to_viewport_local};

/// Per-draw inputs supplied by the host's render loop.
pub struct DrawParams<'a, V: LayoutView + ?Sized> {
    pub view: &'a V,
    /// Panes visible right now, in on-screen order.
    pub panes: &'a [ViewportPane],
}

impl<'a, V: LayoutView + ?Sized> DrawParams<'a, V> {
    #[inline]
    pub fn new(view: &'a V, panes: &'a [ViewportPane]) -> Self {
        Self { view, panes }
    }
}

/// What a frame decided. Returned for hosts that react to hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub highlighted: bool,
    /// Pointer in the view's device pixels (absolute if `pane` is `None`).
    pub local_pointer: Vec2,
    /// Instance quad in the view's device pixels.
    pub device_quad: Quad,
    /// Screen rect of the pane showing the view, if one is visible.
    pub pane: Option<Rect>,
}

/// Draws overlay instances.
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    style: OverlayStyle,
}

impl OverlayRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Runs the hit-test half of the pipeline without recording anything.
    pub fn evaluate<H, V>(&self, host: &H, pointer: Vec2, params: &DrawParams<'_, V>) -> FrameReport
    where
        H: InstanceHost + ?Sized,
        V: LayoutView + ?Sized,
    {
        self.evaluate_quad(host.quad(), pointer, params)
    }

    fn evaluate_quad<V: LayoutView + ?Sized>(&self, quad: Quad, pointer: Vec2, params: &DrawParams<'_, V>) -> FrameReport {
        let pane = resolve_pane(params.panes, params.view.layout_name());
        let local_pointer = screen_to_viewport_local(pointer, pane);
        let device_quad = layout_quad_to_device(quad, params.view);
        let highlighted = point_in_quad(local_pointer, &device_quad);

        FrameReport { highlighted, local_pointer, device_quad, pane }
    }

    /// Draws `host` for one frame and requests the next one.
    ///
    /// `pointer` is the absolute screen position shared by the host's object type.
    pub fn draw<H, V>(
        &self,
        host: &H,
        pointer: Vec2,
        params: &DrawParams<'_, V>,
        out: &mut DrawList,
    ) -> FrameReport
    where
        H: InstanceHost + ?Sized,
        V: LayoutView + ?Sized,
    {
        // One read per frame: the hit test and the recorded geometry agree.
        let quad = host.quad();
        let report = self.evaluate_quad(quad, pointer, params);
        log::trace!(
            "overlay draw in {:?}: pointer {:?} highlighted={}",
            params.view.layout_name(),
            report.local_pointer,
            report.highlighted
        );

        self.record_instance(host, quad, report.highlighted, out);
        self.record_marker(report.local_pointer, out);

        // Always animating: the pointer can move without any editor-side change.
        params.view.request_refresh();

        report
    }

    fn record_instance<H: InstanceHost + ?Sized>(&self, host: &H, quad: Quad, highlighted: bool, out: &mut DrawList) {

        match host.texture() {
            TextureState::Ready { texture, tex_rect } => {
                let tint = if highlighted { self.style.highlight_tint } else { host.color() };
                out.push_textured_quad(Layer::Instances, quad, texture, tex_rect, tint, host.blend_mode());
            }
            TextureState::Failed => {
                out.push_solid_quad(Layer::Instances, quad, self.style.error_fill);
            }
            TextureState::Pending => {
                let fill = if highlighted {
                    self.style.placeholder_highlight_fill
                } else {
                    self.style.placeholder_fill
                };
                out.push_solid_quad(Layer::Instances, quad, fill);
            }
        }
    }

    fn record_marker(&self, at: Vec2, out: &mut DrawList) {
        let marker = Quad::centered_square(at, self.style.marker_half_extent);

        out.push_space(CoordSpace::Device);
        out.push_solid_quad(Layer::Overlay, marker, self.style.marker_fill);
        out.pop_space();
    }
}
