//! Viewport pane resolution.
//!
//! An editor may show several layouts at once, each in its own pane. Pointer
//! coordinates arrive in absolute screen space, so to compare them against an
//! instance's device quad the overlay needs the screen rectangle of the pane that
//! currently displays the instance's layout.
//!
//! Pane layout is volatile (panes open, close, split and move between frames), so
//! nothing here caches: hosts hand over the current list and it is scanned on every
//! draw.

use quadlight_engine::coords::Rect;

/// One visible viewport pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportPane {
    /// Caption shown on the pane's tab; the name of the layout it displays.
    pub caption: String,
    /// Screen rectangle of the pane's drawing surface.
    pub rect: Rect,
}

impl ViewportPane {
    pub fn new(caption: impl Into<String>, rect: Rect) -> Self {
        Self { caption: caption.into(), rect }
    }
}

/// Returns the screen rect of the first pane whose trimmed caption equals
/// `layout_name`, or `None` if that layout is not currently visible.
pub fn resolve_pane(panes: &[ViewportPane], layout_name: &str) -> Option<Rect> {
    let found = panes
        .iter()
        .find(|pane| pane.caption.trim() == layout_name)
        .map(|pane| pane.rect);

    if found.is_none() {
        log::trace!("no visible pane for layout {layout_name:?} ({} pane(s) open)", panes.len());
    }

    found
}

/// Source of the currently visible panes, in on-screen order.
pub trait PaneDirectory {
    fn visible_panes(&self) -> &[ViewportPane];

    fn resolve(&self, layout_name: &str) -> Option<Rect> {
        resolve_pane(self.visible_panes(), layout_name)
    }
}

impl PaneDirectory for [ViewportPane] {
    #[inline]
    fn visible_panes(&self) -> &[ViewportPane] {
        self
    }
}

impl PaneDirectory for Vec<ViewportPane> {
    #[inline]
    fn visible_panes(&self) -> &[ViewportPane] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(caption: &str, x: f32, y: f32) -> ViewportPane {
        ViewportPane::new(caption, Rect::new(x, y, 400.0, 300.0))
    }

    #[test]
    fn resolves_matching_caption() {
        let panes = vec![pane("Layout2", 0.0, 0.0), pane("Layout1", 50.0, 20.0)];
        let rect = resolve_pane(&panes, "Layout1").unwrap();
        assert_eq!((rect.left(), rect.top()), (50.0, 20.0));
    }

    #[test]
    fn empty_pane_list_resolves_nothing() {
        assert_eq!(resolve_pane(&[], "Layout1"), None);
    }

    #[test]
    fn caption_whitespace_is_trimmed() {
        let panes = [pane("  Layout1 \n", 10.0, 10.0)];
        assert!(resolve_pane(&panes, "Layout1").is_some());
    }

    #[test]
    fn match_is_exact() {
        let panes = [pane("Layout10", 0.0, 0.0), pane("layout1", 0.0, 0.0)];
        assert_eq!(resolve_pane(&panes, "Layout1"), None);
    }

    #[test]
    fn first_duplicate_wins() {
        let panes = [pane("Layout1", 1.0, 2.0), pane("Layout1", 3.0, 4.0)];
        assert_eq!(resolve_pane(&panes, "Layout1").unwrap().origin.x, 1.0);
    }

    #[test]
    fn directory_reflects_current_list() {
        let mut panes = vec![pane("Layout1", 5.0, 5.0)];
        assert!(panes.resolve("Layout1").is_some());

        panes.clear();
        assert!(panes.resolve("Layout1").is_none());

        panes.push(pane("Layout1", 90.0, 0.0));
        assert_eq!(panes.resolve("Layout1").unwrap().left(), 90.0);
    }
}
