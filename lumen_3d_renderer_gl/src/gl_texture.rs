/// Texture upload

use glow::HasContext;
use lumen_3d::lumen3d::Result;
use lumen_3d::lumen3d::resource::{SamplerDesc, TextureImage};
use lumen_3d::{engine_bail, engine_debug, engine_err};
use crate::gl_format::{filter_mode_to_gl, pixel_format_to_gl, wrap_mode_to_gl};

pub(crate) struct GlTexture {
    pub(crate) texture: glow::NativeTexture,
}

impl GlTexture {
    /// Upload `image` as a 2D texture and apply the sampler state.
    ///
    /// Rows are tightly packed (RGB rows are not 4-byte aligned), so the
    /// unpack alignment is set to 1 for the upload.
    pub(crate) unsafe fn new(gl: &glow::Context, image: &TextureImage, sampler: &SamplerDesc) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            engine_bail!("lumen3d::gl", "Texture size {}x{} exceeds GL limits", width, height);
        }

        let texture = gl
            .create_texture()
            .map_err(|e| engine_err!("lumen3d::gl", "glGenTextures failed: {}", e))?;

        gl.bind_texture(glow::TEXTURE_2D, Some(texture));

        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap_mode_to_gl(sampler.wrap_s));
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap_mode_to_gl(sampler.wrap_t));
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, filter_mode_to_gl(sampler.min_filter));
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MAG_FILTER,
            filter_mode_to_gl(sampler.effective_mag_filter()),
        );

        let (internal_format, format) = pixel_format_to_gl(image.format());
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            internal_format,
            width as i32,
            height as i32,
            0,
            format,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(image.pixels())),
        );
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 4);

        if sampler.needs_mipmaps() {
            gl.generate_mipmap(glow::TEXTURE_2D);
        }

        gl.bind_texture(glow::TEXTURE_2D, None);

        engine_debug!(
            "lumen3d::gl",
            "Uploaded {}x{} {:?} texture (mipmaps: {})",
            width,
            height,
            image.format(),
            sampler.needs_mipmaps()
        );

        Ok(Self { texture })
    }

    pub(crate) unsafe fn delete(&self, gl: &glow::Context) {
        gl.delete_texture(self.texture);
    }
}
