//! OpenGL function loading and context identification

use crate::render::window::Window;
use glow::HasContext;
use thiserror::Error;

/// Context loading errors
#[derive(Error, Debug)]
pub enum ContextError {
    /// The function loader produced a context that answers no queries
    #[error("OpenGL function loading failed: driver reports no version string")]
    LoaderFailed,
}

/// Result alias for context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// Identification strings reported by the GL driver
#[derive(Debug, Clone)]
pub struct GpuInfo {
    /// GPU vendor string
    pub vendor: String,

    /// Renderer (device) string
    pub renderer: String,

    /// Driver version string
    pub version: String,

    /// Shading language version string
    pub shading_language_version: String,
}

impl GpuInfo {
    fn query(gl: &glow::Context) -> Self {
        unsafe {
            Self {
                vendor: gl.get_parameter_string(glow::VENDOR),
                renderer: gl.get_parameter_string(glow::RENDERER),
                version: gl.get_parameter_string(glow::VERSION),
                shading_language_version: gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            }
        }
    }

    fn log(&self) {
        log::info!("Vendor: {}", self.vendor);
        log::info!("Renderer: {}", self.renderer);
        log::info!("Version: {}", self.version);
        log::info!("Shading Language Version: {}", self.shading_language_version);
    }
}

/// Load all OpenGL function pointers through the window's context
///
/// The window's context must be current. An empty `GL_VERSION` answer means
/// the loader did not actually resolve anything, which is treated as fatal.
pub fn load(window: &mut Window) -> ContextResult<(glow::Context, GpuInfo)> {
    let gl = unsafe { glow::Context::from_loader_function(|s| window.get_proc_address(s)) };

    let info = GpuInfo::query(&gl);
    if info.version.is_empty() {
        return Err(ContextError::LoaderFailed);
    }
    info.log();

    Ok((gl, info))
}
