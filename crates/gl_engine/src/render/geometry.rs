//! Vertex data and GPU geometry upload
//!
//! One fixed triangle with interleaved position and color attributes,
//! uploaded once into a vertex buffer with an associated vertex-array
//! object describing the layout.

use glow::HasContext;
use thiserror::Error;

/// Geometry upload errors
#[derive(Error, Debug)]
pub enum GeometryError {
    /// GPU object creation failed
    #[error("GPU object allocation failed: {0}")]
    Allocation(String),
}

/// Result alias for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Attribute slot for vertex positions
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Attribute slot for vertex colors
pub const COLOR_ATTRIBUTE: u32 = 1;

/// Byte stride between consecutive vertices
pub const VERTEX_STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

/// Byte offset of the color attribute within a vertex
pub const COLOR_OFFSET: i32 = (3 * std::mem::size_of::<f32>()) as i32;

/// Interleaved vertex: position followed by color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
}

/// The fixed triangle: bottom-left red, bottom-right purple, top-left pink
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.6, 0.0, 0.8],
    },
    Vertex {
        position: [-0.5, 0.5, 0.0],
        color: [1.0, 0.75, 0.8],
    },
];

/// GPU-resident triangle geometry
///
/// Owns the vertex buffer and the vertex-array object. Both live until
/// process exit; there is no explicit deletion.
pub struct TriangleMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

impl TriangleMesh {
    /// Allocate the buffer and layout objects and upload the triangle
    ///
    /// The data is uploaded with a static usage hint (written once by the
    /// host, read many times by the device). Attribute 0 is the position
    /// (3 floats at offset 0), attribute 1 the color (3 floats at offset
    /// 12), both with a 24-byte stride. Everything is left unbound and
    /// disabled on return; the frame loop re-binds before drawing.
    pub fn upload(gl: &glow::Context) -> GeometryResult<Self> {
        let vao = unsafe { gl.create_vertex_array() }.map_err(GeometryError::Allocation)?;
        let vbo = unsafe { gl.create_buffer() }.map_err(GeometryError::Allocation)?;

        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);

        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);

            gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);
            gl.vertex_attrib_pointer_f32(
                POSITION_ATTRIBUTE,
                3,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                0,
            );

            gl.enable_vertex_attrib_array(COLOR_ATTRIBUTE);
            gl.vertex_attrib_pointer_f32(
                COLOR_ATTRIBUTE,
                3,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                COLOR_OFFSET,
            );

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.disable_vertex_attrib_array(POSITION_ATTRIBUTE);
            gl.disable_vertex_attrib_array(COLOR_ATTRIBUTE);
        }

        log::debug!(
            "Uploaded {} vertices ({} bytes) to GPU",
            TRIANGLE_VERTICES.len(),
            bytes.len()
        );

        Ok(Self {
            vao,
            vbo,
            vertex_count: TRIANGLE_VERTICES.len() as i32,
        })
    }

    /// Bind the layout object and buffer for drawing
    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        }
    }

    /// Number of vertices to draw
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(VERTEX_STRIDE, 24);
        assert_eq!(COLOR_OFFSET, 12);
        assert_eq!(std::mem::offset_of!(Vertex, position), 0);
        assert_eq!(std::mem::offset_of!(Vertex, color), 12);
    }

    #[test]
    fn test_triangle_is_three_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len(), 3);

        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 3 * 6 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_triangle_values() {
        assert_relative_eq!(TRIANGLE_VERTICES[0].position[0], -0.5);
        assert_relative_eq!(TRIANGLE_VERTICES[0].position[1], -0.5);
        assert_relative_eq!(TRIANGLE_VERTICES[0].color[0], 1.0);

        assert_relative_eq!(TRIANGLE_VERTICES[1].position[0], 0.5);
        assert_relative_eq!(TRIANGLE_VERTICES[1].color[0], 0.6);
        assert_relative_eq!(TRIANGLE_VERTICES[1].color[2], 0.8);

        assert_relative_eq!(TRIANGLE_VERTICES[2].position[1], 0.5);
        assert_relative_eq!(TRIANGLE_VERTICES[2].color[1], 0.75);
    }

    #[test]
    fn test_byte_image_is_stable() {
        // The upload path converts the same constant to bytes each time;
        // two conversions must agree exactly.
        let first: Vec<u8> = bytemuck::cast_slice(&TRIANGLE_VERTICES).to_vec();
        let second: Vec<u8> = bytemuck::cast_slice(&TRIANGLE_VERTICES).to_vec();
        assert_eq!(first, second);

        let floats: &[f32] = bytemuck::cast_slice(&first);
        assert_eq!(floats.len(), 18);
        assert_relative_eq!(floats[3], 1.0); // first vertex color.r
        assert_relative_eq!(floats[9], 0.6); // second vertex color.r
    }
}
