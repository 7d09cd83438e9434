/// CubeScene — GPU handles and per-frame draw sequence of the cube scene.
///
/// Created once at startup (`load` / `upload`), then `render` is called
/// once per frame with the current view and projection matrices.

use std::path::PathBuf;
use glam::Mat4;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::{Renderer, ProgramKey, TextureKey, MeshKey};
use crate::resource::{ShaderSource, TextureImage, SamplerDesc, FilterMode, WrapMode, uniforms};
use crate::transform::Orbit;
use super::cube_data::{CUBE_VERTICES, CUBE_POSITIONS, CLEAR_COLOR, cube_model_matrix};

/// An image file plus the sampler used for it
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAsset {
    pub path: PathBuf,
    pub sampler: SamplerDesc,
    /// Flip rows so that uv (0, 0) is the bottom-left of the image
    pub flip_vertically: bool,
}

/// File locations of everything the scene loads
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAssets {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    /// Bound to texture units 0 and 1 (`ourTexture1`, `ourTexture2`)
    pub textures: [TextureAsset; 2],
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl SceneAssets {
    /// Standard layout under `root`:
    /// `vertex_shader.glsl`, `fragment_shader.glsl`,
    /// `assets/container.jpg`, `assets/awesomeface.png`.
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            vertex_shader: root.join("vertex_shader.glsl"),
            fragment_shader: root.join("fragment_shader.glsl"),
            textures: [
                TextureAsset {
                    path: root.join("assets").join("container.jpg"),
                    sampler: SamplerDesc {
                        wrap_s: WrapMode::Repeat,
                        wrap_t: WrapMode::Repeat,
                        min_filter: FilterMode::Nearest,
                        mag_filter: FilterMode::Linear,
                    },
                    flip_vertically: true,
                },
                TextureAsset {
                    path: root.join("assets").join("awesomeface.png"),
                    sampler: SamplerDesc {
                        wrap_s: WrapMode::Repeat,
                        wrap_t: WrapMode::Repeat,
                        min_filter: FilterMode::LinearMipmapLinear,
                        mag_filter: FilterMode::Linear,
                    },
                    flip_vertically: true,
                },
            ],
        }
    }
}

/// The ten textured cubes, plus optional orbiting bodies.
#[derive(Debug, Clone)]
pub struct CubeScene {
    program: ProgramKey,
    textures: [TextureKey; 2],
    mesh: MeshKey,
    orbits: Vec<Orbit>,
    clear_color: [f32; 4],
}

impl CubeScene {
    /// Read every asset from disk and upload it.
    ///
    /// # Errors
    ///
    /// Any shader read/compile/link or texture load error, unchanged.
    pub fn load<R: Renderer + ?Sized>(renderer: &mut R, assets: &SceneAssets) -> Result<Self> {
        let source = ShaderSource::from_files(&assets.vertex_shader, &assets.fragment_shader)?;

        let [first, second] = &assets.textures;
        let images = [
            (TextureImage::from_file(&first.path, first.flip_vertically)?, first.sampler),
            (TextureImage::from_file(&second.path, second.flip_vertically)?, second.sampler),
        ];

        Self::upload(renderer, &source, &images)
    }

    /// Upload already-loaded assets: program, both textures, the cube mesh.
    ///
    /// Sampler uniforms are set once here (unit 0 and 1).
    pub fn upload<R: Renderer + ?Sized>(
        renderer: &mut R,
        source: &ShaderSource,
        textures: &[(TextureImage, SamplerDesc); 2],
    ) -> Result<Self> {
        let program = renderer.create_shader_program(source)?;
        let textures = [
            renderer.create_texture(&textures[0].0, &textures[0].1)?,
            renderer.create_texture(&textures[1].0, &textures[1].1)?,
        ];
        let mesh = renderer.create_mesh(&CUBE_VERTICES)?;

        renderer.use_program(program)?;
        renderer.set_uniform_i32(program, uniforms::TEXTURE_1, 0)?;
        renderer.set_uniform_i32(program, uniforms::TEXTURE_2, 1)?;

        crate::engine_info!(
            "lumen3d::Scene",
            "Cube scene ready ({} cubes, {} vertices each)",
            CUBE_POSITIONS.len(),
            CUBE_VERTICES.len()
        );

        Ok(Self {
            program,
            textures,
            mesh,
            orbits: Vec::new(),
            clear_color: CLEAR_COLOR,
        })
    }

    /// Add cubes that move along orbits (drawn after the static cubes).
    pub fn with_orbits(mut self, orbits: impl IntoIterator<Item = Orbit>) -> Self {
        self.orbits.extend(orbits);
        self
    }

    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    /// Model matrices of every cube at `time` seconds
    pub fn model_matrices(&self, time: f32) -> Vec<Mat4> {
        (0..CUBE_POSITIONS.len())
            .map(cube_model_matrix)
            .chain(self.orbits.iter().map(|orbit| orbit.model_matrix(time)))
            .collect()
    }

    /// Number of cubes drawn per frame
    pub fn cube_count(&self) -> usize {
        CUBE_POSITIONS.len() + self.orbits.len()
    }

    /// Draw one frame seen through `camera`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        camera: &Camera,
        aspect_ratio: f32,
        time: f32,
    ) -> Result<()> {
        self.render_with(
            renderer,
            &camera.view_matrix(),
            &camera.projection_matrix(aspect_ratio),
            time,
        )
    }

    /// Draw one frame with explicit view / projection matrices.
    ///
    /// Does not present: the caller ends the frame.
    pub fn render_with<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        view: &Mat4,
        projection: &Mat4,
        time: f32,
    ) -> Result<()> {
        renderer.begin_frame(self.clear_color)?;
        renderer.use_program(self.program)?;

        renderer.bind_texture(0, self.textures[0])?;
        renderer.bind_texture(1, self.textures[1])?;

        renderer.set_uniform_mat4(self.program, uniforms::VIEW, view)?;
        renderer.set_uniform_mat4(self.program, uniforms::PROJECTION, projection)?;

        for model in self.model_matrices(time) {
            renderer.set_uniform_mat4(self.program, uniforms::MODEL, &model)?;
            renderer.draw(self.mesh)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "cube_scene_tests.rs"]
mod tests;
