/// Shader sources — the two GLSL texts a program is built from.
///
/// Compilation and linking happen in the backend; this module only owns
/// the text and knows how to read it from disk.

use std::fmt;
use std::fs;
use std::path::Path;
use crate::error::{Error, Result};

/// Uniform names used by the textured-cube scene shaders.
pub mod uniforms {
    /// Model matrix (object → world)
    pub const MODEL: &str = "model";
    /// View matrix (world → view)
    pub const VIEW: &str = "view";
    /// Projection matrix (view → clip)
    pub const PROJECTION: &str = "perspective";
    /// First sampler (texture unit 0)
    pub const TEXTURE_1: &str = "ourTexture1";
    /// Second sampler (texture unit 1)
    pub const TEXTURE_2: &str = "ourTexture2";
}

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Vertex + fragment source pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Vertex shader GLSL
    pub vertex: String,
    /// Fragment shader GLSL
    pub fragment: String,
}

impl ShaderSource {
    /// Build from in-memory sources.
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Read both stages from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderSourceUnreadable` naming the file that failed.
    pub fn from_files(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self> {
        let vertex = read_source(vertex_path.as_ref())?;
        let fragment = read_source(fragment_path.as_ref())?;
        crate::engine_debug!(
            "lumen3d::Shader",
            "Loaded shader sources ({} + {} bytes)",
            vertex.len(),
            fragment.len()
        );
        Ok(Self { vertex, fragment })
    }

    /// Source text of one stage.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|e| Error::ShaderSourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if source.trim().is_empty() {
        return Err(Error::ShaderSourceUnreadable {
            path: path.display().to_string(),
            reason: "file is empty".to_string(),
        });
    }

    Ok(source)
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
