//! # GL Engine
//!
//! A minimal OpenGL rendering library: GLFW windowing, an OpenGL 4.1
//! core-profile context, and a shader pipeline that draws one
//! vertex-colored triangle per frame.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = AppConfig::default();
//!     let mut app = App::new(&config)?;
//!     app.run();
//!     Ok(())
//! }
//! ```
//!
//! Setup is strictly linear (window → context → geometry → shader
//! pipeline) and every step returns a `Result`; there is no degraded mode
//! for a program whose entire output is one triangle.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod render;

mod application;

pub use application::{App, AppError};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{AppConfig, Config, ContextConfig, ShaderConfig, WindowConfig},
        render::{GpuInfo, Renderer, Window},
        App, AppError,
    };
}
