/// Vertex layout shared by the CPU-side meshes and the backends

use std::mem::{offset_of, size_of};

/// Position + texture coordinate vertex.
///
/// Matches the shader inputs
/// `layout (location = 0) in vec3 aPos;` and
/// `layout (location = 1) in vec2 aTexPos;`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// One float vertex attribute inside an interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of f32 components
    pub components: i32,
    /// Byte offset inside the vertex
    pub offset: i32,
}

impl Vertex {
    /// Bytes between consecutive vertices
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    /// Attribute layout: position at location 0, uv at location 1.
    pub fn attributes() -> [VertexAttribute; 2] {
        [
            VertexAttribute {
                location: 0,
                components: 3,
                offset: offset_of!(Vertex, position) as i32,
            },
            VertexAttribute {
                location: 1,
                components: 2,
                offset: offset_of!(Vertex, uv) as i32,
            },
        ]
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
