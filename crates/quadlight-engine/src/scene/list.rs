use super::{DrawCmd, Layer, SortKey};

/// Coordinate space a draw item's geometry is expressed in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CoordSpace {
    /// Layout coordinates; the renderer applies the viewport transform.
    #[default]
    Layout,
    /// Device pixels of the viewport; drawn without the viewport transform.
    Device,
}

/// A single draw item: sort key + command + coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    pub space: CoordSpace,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Coordinate spaces
///
/// Items default to layout space. Use [`push_space`] / [`pop_space`] to record a run of
/// commands in device space (the renderer's "device transform"), then return to the
/// enclosing space.
///
/// ```ignore
/// draw_list.push_space(CoordSpace::Device);
/// // ... push pointer marker ...
/// draw_list.pop_space();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active coordinate spaces; empty means `CoordSpace::Layout`.
    space_stack: Vec<CoordSpace>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the space stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.space_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Coordinate space newly pushed items are recorded in.
    #[inline]
    pub fn current_space(&self) -> CoordSpace {
        self.space_stack.last().copied().unwrap_or_default()
    }

    /// Pushes a draw command on `layer`.
    ///
    /// The item inherits the current coordinate space from the space stack.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(layer, order),
            cmd,
            space: self.current_space(),
        });

        self.sorted_dirty = true;
    }

    /// Records subsequent commands in `space` until the matching [`pop_space`].
    #[inline]
    pub fn push_space(&mut self, space: CoordSpace) {
        self.space_stack.push(space);
    }

    /// Returns to the coordinate space active before the last [`push_space`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_space`.
    #[inline]
    pub fn pop_space(&mut self) {
        debug_assert!(!self.space_stack.is_empty(), "pop_space called without matching push_space");
        self.space_stack.pop();
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so the sort is stable.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Quad, Rect};
    use crate::paint::Color;

    fn square(x: f32) -> Quad {
        Quad::from_rect(Rect::new(x, 0.0, 1.0, 1.0))
    }

    // ── spaces ────────────────────────────────────────────────────────────

    #[test]
    fn items_default_to_layout_space() {
        let mut list = DrawList::new();
        list.push_solid_quad(Layer::Instances, square(0.0), Color::white());
        assert_eq!(list.items()[0].space, CoordSpace::Layout);
    }

    #[test]
    fn push_space_scopes_items() {
        let mut list = DrawList::new();
        list.push_space(CoordSpace::Device);
        list.push_solid_quad(Layer::Overlay, square(0.0), Color::red());
        list.pop_space();
        list.push_solid_quad(Layer::Instances, square(1.0), Color::white());

        assert_eq!(list.items()[0].space, CoordSpace::Device);
        assert_eq!(list.items()[1].space, CoordSpace::Layout);
        assert_eq!(list.current_space(), CoordSpace::Layout);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn overlay_layer_paints_after_instances() {
        let mut list = DrawList::new();
        list.push_solid_quad(Layer::Instances, square(0.0), Color::white());
        list.push_solid_quad(Layer::Overlay, square(1.0), Color::red());
        list.push_solid_quad(Layer::Instances, square(2.0), Color::white());

        assert_eq!(list.indices_in_paint_order(), &[0, 2, 1]);
    }

    #[test]
    fn clear_resets_items_and_spaces() {
        let mut list = DrawList::new();
        list.push_space(CoordSpace::Device);
        list.push_solid_quad(Layer::Overlay, square(0.0), Color::red());
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.current_space(), CoordSpace::Layout);
        assert_eq!(list.iter_in_paint_order().count(), 0);
    }
}
