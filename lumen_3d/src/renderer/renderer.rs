/// Renderer trait - the seam between scene logic and a graphics backend
///
/// Everything above this trait (camera, scene, input) is pure Rust and runs
/// without a GPU. Backends (`lumen_3d_renderer_gl`) implement it with real
/// API calls; tests use the recording `MockRenderer`.

use glam::Mat4;
use slotmap::new_key_type;
use crate::error::Result;
use crate::resource::{ShaderSource, TextureImage, SamplerDesc};
use super::vertex::Vertex;

// ============================================================================
// Resource keys
// ============================================================================

new_key_type! {
    /// Handle to a compiled + linked shader program
    pub struct ProgramKey;
    /// Handle to an uploaded 2D texture
    pub struct TextureKey;
    /// Handle to an uploaded vertex array
    pub struct MeshKey;
}

/// Window and context settings used by a backend at creation time
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Window title
    pub title: String,
    /// Initial window size (logical pixels)
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version (major, minor)
    pub gl_version: (u8, u8),
    /// Wait for vertical sync on present
    pub vsync: bool,
    /// Depth buffer bits
    pub depth_bits: u8,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            title: "Hello from OpenGL".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
            depth_bits: 24,
        }
    }
}

/// Per-frame renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Number of draw calls since the last `begin_frame`
    pub draw_calls: u32,
    /// Number of vertices submitted since the last `begin_frame`
    pub vertices: u32,
    /// Number of frames presented
    pub frames: u64,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Graphics backend interface
///
/// Resources are created once at startup and live as long as the renderer.
/// A frame is `begin_frame` → program/texture/uniform/draw calls → `end_frame`.
pub trait Renderer {
    /// Compile both stages and link them into a program
    ///
    /// # Errors
    ///
    /// `ShaderCompilationFailed` (with the stage and compiler log) or
    /// `ShaderLinkFailed` (with the linker log).
    fn create_shader_program(&mut self, source: &ShaderSource) -> Result<ProgramKey>;

    /// Upload a texture with the given sampler state
    fn create_texture(&mut self, image: &TextureImage, sampler: &SamplerDesc) -> Result<TextureKey>;

    /// Upload a non-indexed triangle list
    fn create_mesh(&mut self, vertices: &[Vertex]) -> Result<MeshKey>;

    /// Resize the drawable area (framebuffer size in pixels)
    fn resize(&mut self, width: u32, height: u32);

    /// Enable depth testing and clear color + depth
    fn begin_frame(&mut self, clear_color: [f32; 4]) -> Result<()>;

    /// Make `program` current
    fn use_program(&mut self, program: ProgramKey) -> Result<()>;

    /// Bind `texture` to texture unit `unit`
    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()>;

    /// Set a 4x4 matrix uniform (column-major)
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the program has no active uniform named `name`.
    fn set_uniform_mat4(&mut self, program: ProgramKey, name: &str, value: &Mat4) -> Result<()>;

    /// Set an int (or sampler) uniform
    fn set_uniform_i32(&mut self, program: ProgramKey, name: &str, value: i32) -> Result<()>;

    /// Set a float uniform
    fn set_uniform_f32(&mut self, program: ProgramKey, name: &str, value: f32) -> Result<()>;

    /// Set a bool uniform (stored as int, as GLSL expects)
    fn set_uniform_bool(&mut self, program: ProgramKey, name: &str, value: bool) -> Result<()> {
        self.set_uniform_i32(program, name, value as i32)
    }

    /// Draw every vertex of `mesh` as triangles with the current program
    fn draw(&mut self, mesh: MeshKey) -> Result<()>;

    /// Present the frame (swap buffers)
    fn end_frame(&mut self) -> Result<()>;

    /// Statistics of the current frame
    fn stats(&self) -> RendererStats;
}

/// Width / height, or `None` for a zero-sized (minimized) surface
pub fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    if width == 0 || height == 0 {
        None
    } else {
        Some(width as f32 / height as f32)
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
