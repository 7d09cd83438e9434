/// Vertex array + vertex buffer for a non-indexed triangle list

use glow::HasContext;
use lumen_3d::lumen3d::{Error, Result};
use lumen_3d::lumen3d::render::Vertex;
use lumen_3d::engine_err;

pub(crate) struct GlMesh {
    pub(crate) vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    pub(crate) vertex_count: u32,
}

impl GlMesh {
    pub(crate) unsafe fn new(gl: &glow::Context, vertices: &[Vertex]) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::InvalidResource("mesh has no vertices".to_string()));
        }
        let vertex_count = u32::try_from(vertices.len())
            .ok()
            .filter(|&count| count <= i32::MAX as u32)
            .ok_or_else(|| Error::InvalidResource(format!("mesh has too many vertices ({})", vertices.len())))?;

        let vao = gl
            .create_vertex_array()
            .map_err(|e| engine_err!("lumen3d::gl", "glGenVertexArrays failed: {}", e))?;
        let vbo = match gl.create_buffer() {
            Ok(vbo) => vbo,
            Err(e) => {
                gl.delete_vertex_array(vao);
                return Err(engine_err!("lumen3d::gl", "glGenBuffers failed: {}", e));
            }
        };

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices), glow::STATIC_DRAW);

        for attribute in Vertex::attributes() {
            gl.vertex_attrib_pointer_f32(
                attribute.location,
                attribute.components,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                attribute.offset,
            );
            gl.enable_vertex_attrib_array(attribute.location);
        }

        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);

        Ok(Self { vao, vbo, vertex_count })
    }

    pub(crate) unsafe fn delete(&self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
    }
}
