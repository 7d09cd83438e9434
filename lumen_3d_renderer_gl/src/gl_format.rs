/// Conversions from engine enums to OpenGL constants

use lumen_3d::lumen3d::resource::{FilterMode, PixelFormat, ShaderStage, WrapMode};

pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

pub(crate) fn wrap_mode_to_gl(mode: WrapMode) -> i32 {
    let value = match mode {
        WrapMode::Repeat => glow::REPEAT,
        WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
        WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
    };
    value as i32
}

pub(crate) fn filter_mode_to_gl(mode: FilterMode) -> i32 {
    let value = match mode {
        FilterMode::Nearest => glow::NEAREST,
        FilterMode::Linear => glow::LINEAR,
        FilterMode::NearestMipmapNearest => glow::NEAREST_MIPMAP_NEAREST,
        FilterMode::LinearMipmapNearest => glow::LINEAR_MIPMAP_NEAREST,
        FilterMode::NearestMipmapLinear => glow::NEAREST_MIPMAP_LINEAR,
        FilterMode::LinearMipmapLinear => glow::LINEAR_MIPMAP_LINEAR,
    };
    value as i32
}

/// (internal format, pixel format) for `glTexImage2D`
pub(crate) fn pixel_format_to_gl(format: PixelFormat) -> (i32, u32) {
    match format {
        PixelFormat::Rgb8 => (glow::RGB8 as i32, glow::RGB),
        PixelFormat::Rgba8 => (glow::RGBA8 as i32, glow::RGBA),
    }
}

/// `GL_TEXTUREn` for a texture unit index
pub(crate) fn texture_unit_to_gl(unit: u32) -> u32 {
    glow::TEXTURE0 + unit
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
