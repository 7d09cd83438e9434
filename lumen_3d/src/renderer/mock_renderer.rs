/// Mock Renderer for unit tests (no GPU required)
///
/// Records every call as a short string command and tracks created
/// resources in slot maps, so scene code can be tested without a GL context.
/// Uniform names are scraped from the GLSL sources (`uniform <type> <name>;`)
/// so that setting an unknown uniform fails like it does on a real backend.

use glam::Mat4;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::resource::{ShaderSource, ShaderStage, TextureImage, SamplerDesc};
use super::{Renderer, RendererStats, ProgramKey, TextureKey, MeshKey, Vertex};

// ============================================================================
// Mock resources
// ============================================================================

#[derive(Debug)]
pub struct MockProgram {
    pub uniforms: Vec<String>,
}

#[derive(Debug)]
pub struct MockTexture {
    pub width: u32,
    pub height: u32,
    pub sampler: SamplerDesc,
}

#[derive(Debug)]
pub struct MockMesh {
    pub vertex_count: u32,
}

// ============================================================================
// Mock Renderer
// ============================================================================

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub programs: SlotMap<ProgramKey, MockProgram>,
    pub textures: SlotMap<TextureKey, MockTexture>,
    pub meshes: SlotMap<MeshKey, MockMesh>,
    /// Recorded commands, in call order
    pub commands: Vec<String>,
    /// Every mat4 / int uniform write, in call order
    pub mat4_uniforms: Vec<(String, Mat4)>,
    pub int_uniforms: Vec<(String, i32)>,
    pub size: (u32, u32),
    /// Clear color of the last `begin_frame`
    pub clear_color: Option<[f32; 4]>,
    /// Next `create_shader_program` fails to compile this stage
    pub fail_compile: Option<ShaderStage>,
    /// Next `create_shader_program` fails to link
    pub fail_link: bool,
    current_program: Option<ProgramKey>,
    stats: RendererStats,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands whose name starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Every value written to the mat4 uniform `name`, in order
    pub fn mat4_values(&self, name: &str) -> Vec<Mat4> {
        self.mat4_uniforms
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, m)| *m)
            .collect()
    }

    fn check_uniform(&self, program: ProgramKey, name: &str) -> Result<()> {
        let prog = self
            .programs
            .get(program)
            .ok_or_else(|| Error::InvalidResource("unknown program".to_string()))?;
        if self.current_program != Some(program) {
            return Err(Error::InvalidResource(format!(
                "uniform '{}' set on a program that is not in use",
                name
            )));
        }
        if !prog.uniforms.iter().any(|u| u == name) {
            return Err(Error::InvalidResource(format!("uniform '{}' not found", name)));
        }
        Ok(())
    }
}

/// Uniform names declared as `uniform <type> <name>;`
fn declared_uniforms(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("uniform "))
        .filter_map(|line| line.split_whitespace().nth(2))
        .map(|name| name.trim_end_matches(';').to_string())
        .collect()
}

impl Renderer for MockRenderer {
    fn create_shader_program(&mut self, source: &ShaderSource) -> Result<ProgramKey> {
        if let Some(stage) = self.fail_compile.take() {
            return Err(Error::ShaderCompilationFailed {
                stage,
                log: "mock compile error".to_string(),
            });
        }
        if std::mem::take(&mut self.fail_link) {
            return Err(Error::ShaderLinkFailed("mock link error".to_string()));
        }

        let mut uniforms = declared_uniforms(&source.vertex);
        uniforms.extend(declared_uniforms(&source.fragment));
        self.commands.push("create_shader_program".to_string());
        Ok(self.programs.insert(MockProgram { uniforms }))
    }

    fn create_texture(&mut self, image: &TextureImage, sampler: &SamplerDesc) -> Result<TextureKey> {
        self.commands.push("create_texture".to_string());
        Ok(self.textures.insert(MockTexture {
            width: image.width(),
            height: image.height(),
            sampler: *sampler,
        }))
    }

    fn create_mesh(&mut self, vertices: &[Vertex]) -> Result<MeshKey> {
        if vertices.is_empty() {
            return Err(Error::InvalidResource("mesh has no vertices".to_string()));
        }
        self.commands.push("create_mesh".to_string());
        Ok(self.meshes.insert(MockMesh { vertex_count: vertices.len() as u32 }))
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.commands.push(format!("resize {}x{}", width, height));
    }

    fn begin_frame(&mut self, clear_color: [f32; 4]) -> Result<()> {
        self.clear_color = Some(clear_color);
        self.stats.draw_calls = 0;
        self.stats.vertices = 0;
        self.commands.push("begin_frame".to_string());
        Ok(())
    }

    fn use_program(&mut self, program: ProgramKey) -> Result<()> {
        if !self.programs.contains_key(program) {
            return Err(Error::InvalidResource("unknown program".to_string()));
        }
        self.current_program = Some(program);
        self.commands.push("use_program".to_string());
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()> {
        if !self.textures.contains_key(texture) {
            return Err(Error::InvalidResource("unknown texture".to_string()));
        }
        self.commands.push(format!("bind_texture {}", unit));
        Ok(())
    }

    fn set_uniform_mat4(&mut self, program: ProgramKey, name: &str, value: &Mat4) -> Result<()> {
        self.check_uniform(program, name)?;
        self.mat4_uniforms.push((name.to_string(), *value));
        self.commands.push(format!("set_uniform_mat4 {}", name));
        Ok(())
    }

    fn set_uniform_i32(&mut self, program: ProgramKey, name: &str, value: i32) -> Result<()> {
        self.check_uniform(program, name)?;
        self.int_uniforms.push((name.to_string(), value));
        self.commands.push(format!("set_uniform_i32 {}", name));
        Ok(())
    }

    fn set_uniform_f32(&mut self, program: ProgramKey, name: &str, _value: f32) -> Result<()> {
        self.check_uniform(program, name)?;
        self.commands.push(format!("set_uniform_f32 {}", name));
        Ok(())
    }

    fn draw(&mut self, mesh: MeshKey) -> Result<()> {
        let vertex_count = self
            .meshes
            .get(mesh)
            .ok_or_else(|| Error::InvalidResource("unknown mesh".to_string()))?
            .vertex_count;
        if self.current_program.is_none() {
            return Err(Error::InvalidResource("draw without a program".to_string()));
        }
        self.stats.draw_calls += 1;
        self.stats.vertices += vertex_count;
        self.commands.push("draw".to_string());
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.stats.frames += 1;
        self.commands.push("end_frame".to_string());
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
