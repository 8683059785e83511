//! Headless mode: sweeps a scripted pointer path across the demo editor.

use anyhow::{Result, ensure};

use quadlight_engine::coords::Vec2;
use quadlight_engine::input::PointerMoveEvent;

use crate::config::StudioConfig;
use crate::editor::{Editor, FrameSummary, SPRITE};

const STEPS: usize = 48;

/// Pointer positions along a diagonal sweep of the window, top-left to bottom-right.
pub fn sweep(size: Vec2, steps: usize) -> Vec<Vec2> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let t = i as f32 / (steps - 1) as f32;
            Vec2::new(size.x * t, size.y * (0.15 + 0.7 * t))
        })
        .collect()
}

/// Runs the sweep, closing "Layout 2" halfway through and deleting the "torch" sprite
/// three quarters in. Returns one summary per step.
pub fn replay(editor: &mut Editor, path: &[Vec2]) -> Vec<FrameSummary> {
    let close_at = path.len() / 2;
    let remove_at = path.len() * 3 / 4;
    let mut frames = Vec::with_capacity(path.len());

    for (i, p) in path.iter().enumerate() {
        if i == close_at {
            editor.close_pane("Layout 2");
        }
        if i == remove_at {
            let removed = editor.remove("torch");
            log::info!(
                "removed {removed} torch sprite(s); {} sprite(s) still tracking",
                editor.registry().ref_count(SPRITE)
            );
        }

        editor.pointer_moved(PointerMoveEvent::new(p.x, p.y));
        let summary = editor.frame();
        log::debug!("step {i:>2} at ({:.0},{:.0}): {:?}", p.x, p.y, summary.highlighted);
        frames.push(summary);
    }

    frames
}

pub fn run(config: &StudioConfig) -> Result<()> {
    let mut editor = Editor::demo(config.size);
    let frames = replay(&mut editor, &sweep(config.size, STEPS));

    ensure!(frames.iter().all(|f| f.needs_redraw), "a frame did not request a refresh");

    let hits = frames.iter().filter(|f| !f.highlighted.is_empty()).count();
    log::info!("replayed {} steps, {hits} with a highlighted sprite", frames.len());
    Ok(())
}
