//! Simulated editor: a window split into layout panes with overlay instances placed in
//! each layout.

use std::cell::Cell;

use quadlight_overlay::prelude::*;

/// Object type shared by every demo sprite.
pub const SPRITE: ObjectTypeId = ObjectTypeId(1);

// ── hosts ─────────────────────────────────────────────────────────────────

/// A placed sprite.
#[derive(Debug, Clone)]
pub struct SpriteHost {
    pub name: String,
    pub rect: Rect,
    /// Rotation about the rect's center, in radians.
    pub angle: f32,
    pub texture: TextureState,
    pub color: Color,
    pub image: Option<ImageInfo>,
}

impl SpriteHost {
    pub fn new(name: &str, rect: Rect, texture: TextureState) -> Self {
        Self {
            name: name.to_string(),
            rect,
            angle: 0.0,
            texture,
            color: Color::white(),
            image: None,
        }
    }

    pub fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_image(mut self, image: ImageInfo) -> Self {
        self.image = Some(image);
        self
    }
}

impl InstanceHost for SpriteHost {
    fn object_type(&self) -> ObjectTypeId {
        SPRITE
    }

    fn quad(&self) -> Quad {
        Quad::from_rect(self.rect).rotated_about(self.rect.center(), self.angle)
    }

    fn texture(&self) -> TextureState {
        self.texture
    }

    fn color(&self) -> Color {
        self.color
    }

    fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    fn set_size(&mut self, size: Vec2) {
        self.rect.size = size;
    }
}

/// One layout's view: its camera plus a refresh flag the runtime polls.
pub struct PaneView {
    layout: String,
    transform: ViewTransform,
    refresh: Cell<bool>,
}

impl PaneView {
    pub fn new(layout: &str, transform: ViewTransform) -> Self {
        Self { layout: layout.to_string(), transform, refresh: Cell::new(false) }
    }

    fn take_refresh(&self) -> bool {
        self.refresh.replace(false)
    }
}

impl ViewportTransform for PaneView {
    fn layout_to_device(&self, p: Vec2) -> Vec2 {
        self.transform.layout_to_device(p)
    }
}

impl LayoutView for PaneView {
    fn layout_name(&self) -> &str {
        &self.layout
    }

    fn request_refresh(&self) {
        self.refresh.set(true);
    }
}

// ── editor ────────────────────────────────────────────────────────────────

struct Placed {
    layout: String,
    instance: OverlayInstance<SpriteHost>,
    hovered: bool,
}

/// Outcome of one editor frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSummary {
    /// Names of the sprites under the pointer, in placement order.
    pub highlighted: Vec<String>,
    pub draw_items: usize,
    /// Some view asked for another frame.
    pub needs_redraw: bool,
}

pub struct Editor {
    registry: PointerRegistry,
    panes: Vec<ViewportPane>,
    views: Vec<PaneView>,
    placed: Vec<Placed>,
    draw_list: DrawList,
}

impl Editor {
    /// Two side-by-side panes, "Layout 1" on the left and "Layout 2" on the right, with
    /// a few sprites in each.
    pub fn demo(size: Vec2) -> Self {
        let mut editor = Self {
            registry: PointerRegistry::default(),
            panes: Vec::new(),
            views: vec![
                PaneView::new("Layout 1", ViewTransform::identity()),
                PaneView::new(
                    "Layout 2",
                    ViewTransform::identity()
                        .with_scroll(Vec2::new(40.0, 20.0))
                        .with_zoom(1.25)
                        .with_angle(-0.1),
                ),
            ],
            placed: Vec::new(),
            draw_list: DrawList::new(),
        };
        editor.resize(size);

        editor.place(
            "Layout 1",
            SpriteHost::new("crate", Rect::new(60.0, 80.0, 120.0, 90.0), TextureState::ready(TextureId(1))),
        );
        editor.place(
            "Layout 1",
            SpriteHost::new("coin", Rect::new(240.0, 260.0, 80.0, 80.0), TextureState::Pending)
                .with_image(ImageInfo::new(64, 64)),
        );
        editor.place(
            "Layout 2",
            SpriteHost::new("door", Rect::new(120.0, 120.0, 140.0, 70.0), TextureState::Pending).rotated(0.5),
        );
        editor.place(
            "Layout 2",
            SpriteHost::new("torch", Rect::new(60.0, 280.0, 40.0, 90.0), TextureState::Failed),
        );

        editor
    }

    /// Re-splits the window into equal-width panes.
    pub fn resize(&mut self, size: Vec2) {
        let count = self.views.len().max(1) as f32;
        let width = size.x / count;

        self.panes = self
            .views
            .iter()
            .enumerate()
            .map(|(i, view)| ViewportPane::new(view.layout.clone(), Rect::new(width * i as f32, 0.0, width, size.y)))
            .collect();

        log::debug!("editor resized to {}x{} ({} panes)", size.x, size.y, self.panes.len());
    }

    /// Places a sprite in `layout`; it starts tracking the pointer immediately.
    pub fn place(&mut self, layout: &str, host: SpriteHost) {
        let mut instance = OverlayInstance::create(host, &self.registry, OverlayStyle::default());
        instance.on_placed_in_layout();
        log::info!("placed {:?} in {layout:?}", instance.host().name);

        self.placed.push(Placed { layout: layout.to_string(), instance, hovered: false });
    }

    /// Removes every sprite named `name`. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.placed.len();
        self.placed.retain(|p| p.instance.host().name != name);
        before - self.placed.len()
    }

    /// Closes the pane showing `layout`; its sprites fall back to screen coordinates.
    pub fn close_pane(&mut self, layout: &str) {
        self.panes.retain(|pane| pane.caption != layout);
        log::info!("closed pane {layout:?}");
    }

    pub fn pointer_moved(&self, ev: PointerMoveEvent) {
        self.registry.dispatch(ev);
    }

    pub fn registry(&self) -> &PointerRegistry {
        &self.registry
    }

    /// Draws every placed sprite through its layout's view.
    pub fn frame(&mut self) -> FrameSummary {
        self.draw_list.clear();
        let mut summary = FrameSummary::default();

        for placed in self.placed.iter_mut() {
            let Some(view) = self.views.iter().find(|v| v.layout == placed.layout) else {
                log::warn!("no view for layout {:?}; skipping", placed.layout);
                continue;
            };

            let params = DrawParams::new(view, &self.panes);
            let report = placed.instance.draw(&params, &mut self.draw_list);

            if report.highlighted != placed.hovered {
                placed.hovered = report.highlighted;
                log::info!(
                    "{} {:?} (pointer {:.0},{:.0} in {:?})",
                    if report.highlighted { "enter" } else { "leave" },
                    placed.instance.host().name,
                    report.local_pointer.x,
                    report.local_pointer.y,
                    placed.layout,
                );
            }
            if report.highlighted {
                summary.highlighted.push(placed.instance.host().name.clone());
            }
        }

        for view in &self.views {
            summary.needs_redraw |= view.take_refresh();
        }
        summary.draw_items = self.draw_list.len();

        log::trace!("frame: {} item(s), highlighted {:?}", summary.draw_items, summary.highlighted);
        summary
    }
}

impl PaneDirectory for Editor {
    fn visible_panes(&self) -> &[ViewportPane] {
        &self.panes
    }
}
