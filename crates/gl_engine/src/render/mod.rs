//! Rendering system
//!
//! Window and context bootstrap, geometry upload, shader pipeline building,
//! and the per-frame renderer. Setup is strictly linear: window → context →
//! geometry → pipeline, then the frame loop drives [`Renderer::render_frame`]
//! until quit.

pub mod context;
pub mod geometry;
pub mod pipeline;
pub mod renderer;
pub mod window;

pub use context::{ContextError, GpuInfo};
pub use geometry::{GeometryError, TriangleMesh, Vertex, TRIANGLE_VERTICES};
pub use pipeline::{PipelineError, ShaderProgram, ShaderSource, ShaderStage};
pub use renderer::Renderer;
pub use window::{Window, WindowError};

use thiserror::Error;

/// Rendering errors from any stage of setup
#[derive(Error, Debug)]
pub enum RenderError {
    /// Function-pointer loading failed
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// Geometry upload failed
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Shader pipeline build failed
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Result alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
