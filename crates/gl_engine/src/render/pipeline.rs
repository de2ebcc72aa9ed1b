//! Shader pipeline builder
//!
//! Loads GLSL source for the vertex and fragment stages, compiles each into
//! a shader object, and links them into one program object. Every step is
//! checked: an unreadable or empty source, a compile failure, or a link
//! failure aborts the build with a diagnostic naming the stage, instead of
//! handing back a program that fails at first use.

use crate::config::ShaderConfig;
use glow::HasContext;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shader pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A shader source file could not be read
    #[error("Failed to read {stage} shader source {path:?}: {source}")]
    SourceLoad {
        /// The stage whose source was requested
        stage: ShaderStage,
        /// The path that could not be read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A shader source file exists but contains nothing to compile
    #[error("{stage} shader source {path:?} is empty")]
    EmptySource {
        /// The stage whose source was empty
        stage: ShaderStage,
        /// The offending path
        path: PathBuf,
    },

    /// The driver rejected a shader at compile time
    #[error("{stage} shader compilation failed: {log}")]
    Compile {
        /// The stage that failed to compile
        stage: ShaderStage,
        /// The driver's info log
        log: String,
    },

    /// The driver rejected the program at link time
    #[error("Shader program link failed: {log}")]
    Link {
        /// The driver's info log
        log: String,
    },

    /// GPU object creation failed
    #[error("GPU object allocation failed: {0}")]
    Allocation(String),
}

/// Result alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// The two programmable stages of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn fallback_source(self) -> &'static str {
        match self {
            Self::Vertex => FALLBACK_VERTEX_SOURCE,
            Self::Fragment => FALLBACK_FRAGMENT_SOURCE,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Embedded minimal vertex shader, used only when the fallback is enabled
const FALLBACK_VERTEX_SOURCE: &str = "\
#version 410 core
in vec4 position;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, position.w);
}
";

/// Embedded minimal fragment shader, used only when the fallback is enabled
const FALLBACK_FRAGMENT_SOURCE: &str = "\
#version 410 core
out vec4 color;
void main()
{
    color = vec4(0.772549f, 0.188235f, 0.188235f, 1.f);
}
";

/// Where a shader's text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Read from a file on disk
    File(PathBuf),
    /// Substituted from the embedded fallback constants
    EmbeddedFallback,
}

/// Source text for one shader stage
#[derive(Debug, Clone)]
pub struct ShaderSource {
    /// The stage this source compiles into
    pub stage: ShaderStage,
    /// The GLSL text
    pub text: String,
    /// Where the text came from
    pub origin: SourceOrigin,
}

impl ShaderSource {
    /// Load the source for `stage` from `path`
    ///
    /// With `allow_fallback`, an unreadable file is replaced by the embedded
    /// shader for the stage and the substitution is logged. An empty file is
    /// always an error; compiling empty source would only fail later with a
    /// worse diagnostic.
    pub fn load(stage: ShaderStage, path: &Path, allow_fallback: bool) -> PipelineResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                if text.trim().is_empty() {
                    return Err(PipelineError::EmptySource {
                        stage,
                        path: path.to_path_buf(),
                    });
                }
                log::debug!("Loaded {} shader from {:?}", stage, path);
                Ok(Self {
                    stage,
                    text,
                    origin: SourceOrigin::File(path.to_path_buf()),
                })
            }
            Err(e) if allow_fallback => {
                log::warn!(
                    "Could not read {} shader {:?} ({}), using embedded fallback",
                    stage,
                    path,
                    e
                );
                Ok(Self {
                    stage,
                    text: stage.fallback_source().to_string(),
                    origin: SourceOrigin::EmbeddedFallback,
                })
            }
            Err(e) => Err(PipelineError::SourceLoad {
                stage,
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Whether this source came from the embedded fallback
    pub fn is_fallback(&self) -> bool {
        self.origin == SourceOrigin::EmbeddedFallback
    }
}

/// A linked shader program
///
/// The handle lives until process exit; the per-stage shader objects are
/// detached and deleted right after a successful link.
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Load, compile, and link the program described by `config`
    pub fn build(gl: &glow::Context, config: &ShaderConfig) -> PipelineResult<Self> {
        let vertex = ShaderSource::load(
            ShaderStage::Vertex,
            Path::new(&config.vertex_path),
            config.allow_fallback,
        )?;
        let fragment = ShaderSource::load(
            ShaderStage::Fragment,
            Path::new(&config.fragment_path),
            config.allow_fallback,
        )?;

        Self::from_sources(gl, &vertex, &fragment)
    }

    /// Compile and link a program from already-loaded sources
    pub fn from_sources(
        gl: &glow::Context,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> PipelineResult<Self> {
        let vertex_shader = compile(gl, vertex)?;
        let fragment_shader = match compile(gl, fragment) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex_shader) };
                return Err(e);
            }
        };

        let program = unsafe { gl.create_program() }.map_err(PipelineError::Allocation)?;

        let linked = unsafe {
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);
            gl.get_program_link_status(program)
        };

        // The stage objects are no longer needed whether or not the link
        // succeeded.
        unsafe {
            gl.detach_shader(program, vertex_shader);
            gl.detach_shader(program, fragment_shader);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);
        }

        if !linked {
            let info_log = unsafe { gl.get_program_info_log(program) };
            unsafe { gl.delete_program(program) };
            return Err(PipelineError::Link { log: info_log });
        }

        log::debug!("Shader program linked");
        Ok(Self { program })
    }

    /// Make this program the active one
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Raw program handle
    pub fn handle(&self) -> glow::Program {
        self.program
    }
}

fn compile(gl: &glow::Context, source: &ShaderSource) -> PipelineResult<glow::Shader> {
    let shader =
        unsafe { gl.create_shader(source.stage.gl_type()) }.map_err(PipelineError::Allocation)?;

    let compiled = unsafe {
        gl.shader_source(shader, &source.text);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if !compiled {
        let info_log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        return Err(PipelineError::Compile {
            stage: source.stage,
            log: info_log,
        });
    }

    Ok(shader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gl_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("vert_ok.glsl");
        fs::write(&path, "#version 410 core\nvoid main() {}\n").unwrap();

        let source = ShaderSource::load(ShaderStage::Vertex, &path, false).unwrap();
        assert_eq!(source.stage, ShaderStage::Vertex);
        assert!(source.text.starts_with("#version 410 core"));
        assert!(!source.is_fallback());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = temp_path("does_not_exist.glsl");

        let err = ShaderSource::load(ShaderStage::Fragment, &path, false).unwrap_err();
        match err {
            PipelineError::SourceLoad { stage, .. } => assert_eq!(stage, ShaderStage::Fragment),
            other => panic!("expected SourceLoad, got {:?}", other),
        }
        // The diagnostic must name the failing stage.
        assert!(err.to_string().contains("fragment"));
    }

    #[test]
    fn test_missing_file_with_fallback() {
        let path = temp_path("also_missing.glsl");

        let source = ShaderSource::load(ShaderStage::Vertex, &path, true).unwrap();
        assert!(source.is_fallback());
        assert_eq!(source.text, FALLBACK_VERTEX_SOURCE);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let path = temp_path("empty.glsl");
        fs::write(&path, "  \n\t\n").unwrap();

        let err = ShaderSource::load(ShaderStage::Vertex, &path, true).unwrap_err();
        match err {
            PipelineError::EmptySource { stage, .. } => assert_eq!(stage, ShaderStage::Vertex),
            other => panic!("expected EmptySource, got {:?}", other),
        }
        assert!(err.to_string().contains("vertex"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_fallback_sources_look_like_glsl() {
        assert!(FALLBACK_VERTEX_SOURCE.starts_with("#version 410 core"));
        assert!(FALLBACK_FRAGMENT_SOURCE.starts_with("#version 410 core"));
        assert!(FALLBACK_VERTEX_SOURCE.contains("gl_Position"));
        assert!(FALLBACK_FRAGMENT_SOURCE.contains("color"));
    }
}
