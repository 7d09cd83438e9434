/// GlRenderer - OpenGL implementation of the Renderer trait

use glow::HasContext;
use lumen_3d::glam::Mat4;
use lumen_3d::lumen3d::{Error, Renderer, Result};
use lumen_3d::lumen3d::render::{MeshKey, ProgramKey, RendererConfig, RendererStats, TextureKey, Vertex};
use lumen_3d::lumen3d::resource::{SamplerDesc, ShaderSource, TextureImage};
use lumen_3d::{engine_bail, engine_debug, engine_info};
use slotmap::SlotMap;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use crate::gl_context::GlContext;
use crate::gl_format::texture_unit_to_gl;
use crate::gl_mesh::GlMesh;
use crate::gl_shader::GlProgram;
use crate::gl_texture::GlTexture;

/// OpenGL renderer owning its window and context.
///
/// All GL objects are deleted on drop, before the context goes away.
pub struct GlRenderer {
    context: GlContext,
    programs: SlotMap<ProgramKey, GlProgram>,
    textures: SlotMap<TextureKey, GlTexture>,
    meshes: SlotMap<MeshKey, GlMesh>,
    current_program: Option<ProgramKey>,
    size: (u32, u32),
    max_texture_units: u32,
    stats: RendererStats,
}

impl GlRenderer {
    /// Create the window, the GL context and the default pipeline state
    /// (depth test on, viewport covering the window).
    pub fn new(event_loop: &ActiveEventLoop, config: &RendererConfig) -> Result<Self> {
        let context = GlContext::new(event_loop, config)?;
        let size = context.window().inner_size();

        let max_texture_units = unsafe {
            let gl = &context.gl;
            gl.viewport(0, 0, size.width as i32, size.height as i32);
            gl.enable(glow::DEPTH_TEST);
            gl.get_parameter_i32(glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS).max(1) as u32
        };

        engine_info!(
            "lumen3d::gl",
            "GL renderer created ({}x{}, {} texture units)",
            size.width,
            size.height,
            max_texture_units
        );

        Ok(Self {
            context,
            programs: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
            current_program: None,
            size: (size.width, size.height),
            max_texture_units,
            stats: RendererStats::default(),
        })
    }

    pub fn window(&self) -> &Window {
        self.context.window()
    }

    /// Framebuffer size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    fn gl(&self) -> &glow::Context {
        &self.context.gl
    }

    /// Program that uniforms can be written to: it must exist and be in use
    fn current_program(&self, program: ProgramKey, name: &str) -> Result<&GlProgram> {
        let gl_program = self
            .programs
            .get(program)
            .ok_or_else(|| Error::InvalidResource("unknown shader program".to_string()))?;
        if self.current_program != Some(program) {
            return Err(Error::InvalidResource(format!(
                "uniform '{}' set on a program that is not in use",
                name
            )));
        }
        Ok(gl_program)
    }
}

impl Renderer for GlRenderer {
    fn create_shader_program(&mut self, source: &ShaderSource) -> Result<ProgramKey> {
        let program = unsafe { GlProgram::new(self.gl(), source)? };
        Ok(self.programs.insert(program))
    }

    fn create_texture(&mut self, image: &TextureImage, sampler: &SamplerDesc) -> Result<TextureKey> {
        let texture = unsafe { GlTexture::new(self.gl(), image, sampler)? };
        Ok(self.textures.insert(texture))
    }

    fn create_mesh(&mut self, vertices: &[Vertex]) -> Result<MeshKey> {
        let mesh = unsafe { GlMesh::new(self.gl(), vertices)? };
        engine_debug!("lumen3d::gl", "Uploaded mesh ({} vertices)", mesh.vertex_count);
        Ok(self.meshes.insert(mesh))
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.context.resize(width, height) {
            unsafe {
                self.gl().viewport(0, 0, width as i32, height as i32);
            }
            self.size = (width, height);
        }
    }

    fn begin_frame(&mut self, clear_color: [f32; 4]) -> Result<()> {
        self.stats.draw_calls = 0;
        self.stats.vertices = 0;

        let [r, g, b, a] = clear_color;
        unsafe {
            let gl = self.gl();
            gl.enable(glow::DEPTH_TEST);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        Ok(())
    }

    fn use_program(&mut self, program: ProgramKey) -> Result<()> {
        let native = self
            .programs
            .get(program)
            .ok_or_else(|| Error::InvalidResource("unknown shader program".to_string()))?
            .program;
        unsafe {
            self.gl().use_program(Some(native));
        }
        self.current_program = Some(program);
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureKey) -> Result<()> {
        if unit >= self.max_texture_units {
            engine_bail!(
                "lumen3d::gl",
                "Texture unit {} out of range (max {})",
                unit,
                self.max_texture_units
            );
        }
        let native = self
            .textures
            .get(texture)
            .ok_or_else(|| Error::InvalidResource("unknown texture".to_string()))?
            .texture;
        unsafe {
            let gl = self.gl();
            gl.active_texture(texture_unit_to_gl(unit));
            gl.bind_texture(glow::TEXTURE_2D, Some(native));
        }
        Ok(())
    }

    fn set_uniform_mat4(&mut self, program: ProgramKey, name: &str, value: &Mat4) -> Result<()> {
        let location = self.current_program(program, name)?.uniform_location(name)?;
        unsafe {
            self.gl()
                .uniform_matrix_4_f32_slice(Some(location), false, &value.to_cols_array());
        }
        Ok(())
    }

    fn set_uniform_i32(&mut self, program: ProgramKey, name: &str, value: i32) -> Result<()> {
        let location = self.current_program(program, name)?.uniform_location(name)?;
        unsafe {
            self.gl().uniform_1_i32(Some(location), value);
        }
        Ok(())
    }

    fn set_uniform_f32(&mut self, program: ProgramKey, name: &str, value: f32) -> Result<()> {
        let location = self.current_program(program, name)?.uniform_location(name)?;
        unsafe {
            self.gl().uniform_1_f32(Some(location), value);
        }
        Ok(())
    }

    fn draw(&mut self, mesh: MeshKey) -> Result<()> {
        if self.current_program.is_none() {
            return Err(Error::InvalidResource("draw without a shader program in use".to_string()));
        }
        let gl_mesh = self
            .meshes
            .get(mesh)
            .ok_or_else(|| Error::InvalidResource("unknown mesh".to_string()))?;
        let (vao, vertex_count) = (gl_mesh.vao, gl_mesh.vertex_count);

        unsafe {
            let gl = self.gl();
            gl.bind_vertex_array(Some(vao));
            gl.draw_arrays(glow::TRIANGLES, 0, vertex_count as i32);
            gl.bind_vertex_array(None);
        }

        self.stats.draw_calls += 1;
        self.stats.vertices += vertex_count;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.context.swap_buffers()?;
        self.stats.frames += 1;
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        let gl = &self.context.gl;
        unsafe {
            gl.use_program(None);
            for (_, mesh) in self.meshes.drain() {
                mesh.delete(gl);
            }
            for (_, texture) in self.textures.drain() {
                texture.delete(gl);
            }
            for (_, program) in self.programs.drain() {
                program.delete(gl);
            }
        }
        engine_debug!("lumen3d::gl", "GL renderer destroyed");
    }
}
