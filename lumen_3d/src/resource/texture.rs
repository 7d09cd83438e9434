/// Texture images and sampler descriptions.
///
/// Images are decoded on the CPU with the `image` crate into tightly packed
/// 8-bit RGB or RGBA rows, bottom row first when flipped (OpenGL's texture
/// origin is the lower-left corner).

use std::path::Path;
use image::{DynamicImage, ImageReader};
use crate::error::{Error, Result};

/// Pixel layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel
    Rgb8,
    /// 4 bytes per pixel
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Decoded, GPU-ready texture pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl TextureImage {
    /// Wrap raw pixels.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if the size is zero or the buffer
    /// length does not match width × height × channels.
    pub fn from_pixels(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResource(format!(
                "texture size {}x{} is empty",
                width, height
            )));
        }
        let expected = width as usize * height as usize * format.channels();
        if pixels.len() != expected {
            return Err(Error::InvalidResource(format!(
                "texture {}x{} {:?} needs {} bytes, got {}",
                width, height, format, expected, pixels.len()
            )));
        }
        Ok(Self { width, height, format, pixels })
    }

    /// Decode an image file (format guessed from content).
    ///
    /// # Errors
    ///
    /// Returns `Error::TextureLoadFailed` if the file cannot be opened or decoded.
    pub fn from_file(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self> {
        let path = path.as_ref();
        let fail = |reason: String| Error::TextureLoadFailed {
            path: path.display().to_string(),
            reason,
        };

        let image = ImageReader::open(path)
            .map_err(|e| fail(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| fail(e.to_string()))?
            .decode()
            .map_err(|e| fail(e.to_string()))?;

        let texture = Self::from_dynamic(image, flip_vertically).map_err(|e| fail(e.to_string()))?;
        crate::engine_debug!(
            "lumen3d::Texture",
            "Decoded '{}' ({}x{} {:?})",
            path.display(),
            texture.width,
            texture.height,
            texture.format
        );
        Ok(texture)
    }

    /// Decode an encoded image held in memory.
    ///
    /// # Errors
    ///
    /// Returns `Error::TextureLoadFailed` if the bytes cannot be decoded.
    pub fn from_memory(bytes: &[u8], flip_vertically: bool) -> Result<Self> {
        let fail = |reason: String| Error::TextureLoadFailed {
            path: "<memory>".to_string(),
            reason,
        };
        let image = image::load_from_memory(bytes).map_err(|e| fail(e.to_string()))?;
        Self::from_dynamic(image, flip_vertically).map_err(|e| fail(e.to_string()))
    }

    fn from_dynamic(image: DynamicImage, flip_vertically: bool) -> Result<Self> {
        let image = if flip_vertically { image.flipv() } else { image };
        let (width, height) = (image.width(), image.height());

        if image.color().has_alpha() {
            Self::from_pixels(width, height, PixelFormat::Rgba8, image.into_rgba8().into_raw())
        } else {
            Self::from_pixels(width, height, PixelFormat::Rgb8, image.into_rgb8().into_raw())
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Tightly packed rows, first row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl FilterMode {
    /// Whether sampling reads from the mipmap chain
    pub fn uses_mipmaps(&self) -> bool {
        !matches!(self, FilterMode::Nearest | FilterMode::Linear)
    }
}

/// Sampler state attached to a texture at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerDesc {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    /// Minification filter (may use mipmaps)
    pub min_filter: FilterMode,
    /// Magnification filter (mipmap variants are invalid here and treated as Linear)
    pub mag_filter: FilterMode,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: FilterMode::LinearMipmapLinear,
            mag_filter: FilterMode::Linear,
        }
    }
}

impl SamplerDesc {
    /// Whether the backend must generate mipmaps for this sampler
    pub fn needs_mipmaps(&self) -> bool {
        self.min_filter.uses_mipmaps()
    }

    /// Magnification filter with mipmap variants folded to their base filter
    pub fn effective_mag_filter(&self) -> FilterMode {
        match self.mag_filter {
            FilterMode::Nearest | FilterMode::NearestMipmapNearest | FilterMode::NearestMipmapLinear => {
                FilterMode::Nearest
            }
            _ => FilterMode::Linear,
        }
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
