//! Window management using GLFW
//!
//! Provides window creation with an OpenGL context and close-event polling

use crate::config::{ContextConfig, WindowConfig};
use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The GLFW platform subsystem failed to initialize
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or OpenGL context creation failed
    #[error("Window creation failed")]
    CreationFailed,

    /// Other GLFW error
    #[error("GLFW error: {0}")]
    GlfwError(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with an OpenGL context made current on creation
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and its OpenGL context
    ///
    /// Applies the context hints from `context` before creation, places the
    /// window at the configured position, and makes the context current.
    /// The hints are requests; the platform may grant a different compatible
    /// context.
    pub fn new(config: &WindowConfig, context: &ContextConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        if context.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        }
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compat));
        glfw.window_hint(glfw::WindowHint::DoubleBuffer(context.double_buffer));
        glfw.window_hint(glfw::WindowHint::DepthBits(Some(context.depth_bits)));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        // Context creation is fused with window creation here, so a context
        // failure surfaces as CreationFailed and is fatal.
        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        let (x, y) = config.position;
        window.set_pos(x, y);
        window.set_close_polling(true);
        window.make_current();

        log::debug!(
            "Created {}x{} window with GL {}.{} context request",
            config.width,
            config.height,
            context.major,
            context.minor
        );

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Check if the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set whether the window should close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Drain pending OS events into the event receiver (non-blocking)
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Iterate events gathered by the last [`poll_events`](Self::poll_events)
    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Get the framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Resolve an OpenGL function pointer through the current context
    pub fn get_proc_address(&mut self, procname: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(procname) as *const _
    }
}
