//! Frame rendering facade
//!
//! Owns the loaded GL context, the uploaded geometry, and the linked shader
//! program, and replays the fixed per-frame sequence: reset state, clear,
//! bind, one draw call.

use crate::config::ShaderConfig;
use crate::render::context::{self, GpuInfo};
use crate::render::geometry::TriangleMesh;
use crate::render::pipeline::ShaderProgram;
use crate::render::window::Window;
use crate::render::RenderResult;
use glow::HasContext;

/// Background color, an almost-black gray
const CLEAR_COLOR: [f32; 4] = [0.070_588_2, 0.070_588_2, 0.070_588_2, 1.0];

/// High-level renderer for the fixed triangle scene
pub struct Renderer {
    gl: glow::Context,
    gpu_info: GpuInfo,
    program: ShaderProgram,
    mesh: TriangleMesh,
}

impl Renderer {
    /// Load the GL context from the window and build all GPU resources
    ///
    /// Runs the one-time setup sequence: function-pointer loading, geometry
    /// upload, shader pipeline build. Any failure aborts construction.
    pub fn new(window: &mut Window, shaders: &ShaderConfig) -> RenderResult<Self> {
        let (gl, gpu_info) = context::load(window)?;
        let mesh = TriangleMesh::upload(&gl)?;
        let program = ShaderProgram::build(&gl, shaders)?;

        Ok(Self {
            gl,
            gpu_info,
            program,
            mesh,
        })
    }

    /// Identification strings queried from the driver at startup
    pub fn gpu_info(&self) -> &GpuInfo {
        &self.gpu_info
    }

    /// Render one frame into the back buffer
    ///
    /// `width` and `height` are the current framebuffer dimensions; the
    /// viewport is reapplied unconditionally every frame.
    pub fn render_frame(&self, width: i32, height: i32) {
        self.begin_frame(width, height);
        self.draw();
    }

    /// Reset per-frame state: no depth test, no culling, full viewport,
    /// cleared color and depth, program bound
    fn begin_frame(&self, width: i32, height: i32) {
        unsafe {
            self.gl.disable(glow::DEPTH_TEST);
            self.gl.disable(glow::CULL_FACE);

            self.gl.viewport(0, 0, width, height);

            self.gl
                .clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.program.bind(&self.gl);
    }

    /// Issue the single draw call for the triangle
    fn draw(&self) {
        self.mesh.bind(&self.gl);
        unsafe {
            self.gl.draw_arrays(glow::TRIANGLES, 0, self.mesh.vertex_count());
        }
    }
}
