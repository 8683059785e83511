use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use quadlight_engine::coords::Vec2;
use quadlight_engine::input::platform::winit::translate_window_event;

use crate::config::StudioConfig;
use crate::editor::Editor;

/// Interactive mode: one window, the editor fed from its cursor events.
pub fn run(config: StudioConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut state = StudioState::new(config);

    event_loop
        .run_app(&mut state)
        .context("winit event loop terminated with error")?;

    Ok(())
}

struct StudioState {
    config: StudioConfig,
    editor: Editor,
    window: Option<Window>,
}

impl StudioState {
    fn new(config: StudioConfig) -> Self {
        let editor = Editor::demo(config.size);
        Self { config, editor, window: None }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.size.x as f64, self.config.size.y as f64));

        let window = event_loop.create_window(attrs).context("failed to create window")?;
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for StudioState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        if let Some(ev) = translate_window_event(&event, window.scale_factor()) {
            self.editor.pointer_moved(ev);
            window.request_redraw();
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(window.scale_factor());
                self.editor.resize(Vec2::new(logical.width, logical.height));
                window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let summary = self.editor.frame();
                // Drawing asks for the next frame so hover state follows the pointer.
                if summary.needs_redraw {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
