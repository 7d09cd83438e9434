//! Resource module — CPU-side shader sources and texture images.

mod shader;
mod texture;

pub use shader::{ShaderSource, ShaderStage, uniforms};
pub use texture::{TextureImage, PixelFormat, SamplerDesc, WrapMode, FilterMode};
