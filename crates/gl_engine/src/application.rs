//! Application lifecycle and main loop

use crate::config::AppConfig;
use crate::render::{RenderError, Renderer, Window, WindowError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Window or platform error
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Rendering setup error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// The application: window, renderer, and the running flag
///
/// All process-lifetime handles live here, each with a single writer. The
/// running flag is only checked at loop-iteration boundaries, so an
/// iteration in progress always completes.
pub struct App {
    window: Window,
    renderer: Renderer,
    running: bool,
}

impl App {
    /// Run the full setup sequence: window, context, geometry, pipeline
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log::info!("Initializing application...");

        let mut window = Window::new(&config.window, &config.context)?;
        let renderer = Renderer::new(&mut window, &config.shaders)?;

        Ok(Self {
            window,
            renderer,
            running: true,
        })
    }

    /// Run the main loop until a close event arrives
    ///
    /// Each iteration: drain events, render the frame, present it.
    pub fn run(&mut self) {
        log::info!("Starting main loop...");

        while self.running {
            self.process_events();

            let (width, height) = self.window.framebuffer_size();
            self.renderer.render_frame(width, height);

            self.window.swap_buffers();
        }

        log::info!("Application shutdown complete");
    }

    /// Drain pending events; a close request clears the running flag
    fn process_events(&mut self) {
        self.window.poll_events();

        for (_, event) in self.window.flush_events() {
            if is_quit_event(&event) {
                log::info!("Goodbye!");
                self.running = false;
            }
            // All other event types are ignored.
        }
    }

    /// Whether the main loop will run another iteration
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The renderer owned by this application
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

fn is_quit_event(event: &glfw::WindowEvent) -> bool {
    matches!(event, glfw::WindowEvent::Close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_event_is_quit() {
        assert!(is_quit_event(&glfw::WindowEvent::Close));
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert!(!is_quit_event(&glfw::WindowEvent::Refresh));
        assert!(!is_quit_event(&glfw::WindowEvent::Pos(10, 10)));
        assert!(!is_quit_event(&glfw::WindowEvent::Key(
            glfw::Key::Escape,
            0,
            glfw::Action::Press,
            glfw::Modifiers::empty(),
        )));
    }
}
