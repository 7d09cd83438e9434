/// GlProgram - linked shader program and its active uniforms

use glow::HasContext;
use lumen_3d::lumen3d::{Error, Result};
use lumen_3d::lumen3d::resource::{ShaderSource, ShaderStage};
use lumen_3d::{engine_debug, engine_err, engine_error};
use rustc_hash::FxHashMap;
use crate::gl_format::shader_stage_to_gl;

pub(crate) struct GlProgram {
    pub(crate) program: glow::NativeProgram,
    /// Active uniforms by name, queried once after linking
    uniforms: FxHashMap<String, glow::NativeUniformLocation>,
}

impl GlProgram {
    /// Compile both stages and link them.
    ///
    /// Intermediate shader objects are deleted whatever the outcome.
    pub(crate) unsafe fn new(gl: &glow::Context, source: &ShaderSource) -> Result<Self> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, source.stage(ShaderStage::Vertex))?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, source.stage(ShaderStage::Fragment)) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(vertex);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(engine_err!("lumen3d::gl", "glCreateProgram failed: {}", e));
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            engine_error!("lumen3d::gl", "Shader program link failed: {}", log.trim());
            return Err(Error::ShaderLinkFailed(log));
        }

        let uniforms = active_uniforms(gl, program);
        engine_debug!(
            "lumen3d::gl",
            "Linked shader program ({} active uniforms)",
            uniforms.len()
        );

        Ok(Self { program, uniforms })
    }

    /// Location of an active uniform.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the program has no active uniform `name`
    /// (undeclared, misspelled, or optimized away by the compiler).
    pub(crate) fn uniform_location(&self, name: &str) -> Result<&glow::NativeUniformLocation> {
        self.uniforms
            .get(name)
            .ok_or_else(|| Error::InvalidResource(format!("uniform '{}' not found in shader program", name)))
    }

    pub(crate) unsafe fn delete(&self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

unsafe fn compile_stage(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::NativeShader> {
    let shader = gl
        .create_shader(shader_stage_to_gl(stage))
        .map_err(|e| engine_err!("lumen3d::gl", "glCreateShader({}) failed: {}", stage, e))?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        engine_error!("lumen3d::gl", "{} shader compilation failed: {}", stage, log.trim());
        return Err(Error::ShaderCompilationFailed { stage, log });
    }

    Ok(shader)
}

/// Name → location of every active uniform. Array uniforms are reported by
/// the driver as `name[0]`; they are also registered under `name`.
unsafe fn active_uniforms(
    gl: &glow::Context,
    program: glow::NativeProgram,
) -> FxHashMap<String, glow::NativeUniformLocation> {
    let mut uniforms = FxHashMap::default();
    for index in 0..gl.get_active_uniforms(program) {
        let Some(active) = gl.get_active_uniform(program, index) else {
            continue;
        };
        if let Some(location) = gl.get_uniform_location(program, &active.name) {
            if let Some(base) = active.name.strip_suffix("[0]") {
                uniforms.insert(base.to_string(), location.clone());
            }
            uniforms.insert(active.name, location);
        }
    }
    uniforms
}
