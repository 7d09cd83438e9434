//! Error types for the Lumen 3D engine
//!
//! Every fallible operation (shader loading, texture decoding, GPU object
//! creation, configuration checks) returns one of these instead of
//! terminating the process.

use std::fmt;
use crate::resource::ShaderStage;

/// Result type for Lumen 3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen 3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (OpenGL, windowing, context creation)
    BackendError(String),

    /// Initialization failed (window, GL context, renderer)
    InitializationFailed(String),

    /// Invalid resource (unknown handle, missing uniform, ...)
    InvalidResource(String),

    /// A configuration value or argument is out of range
    InvalidParameter(String),

    /// A shader source file could not be read
    ShaderSourceUnreadable {
        /// Path of the shader file
        path: String,
        /// I/O error message
        reason: String,
    },

    /// A shader stage failed to compile
    ShaderCompilationFailed {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler info log
        log: String,
    },

    /// The shader program failed to link (carries the linker info log)
    ShaderLinkFailed(String),

    /// A texture image could not be read or decoded
    TextureLoadFailed {
        /// Path (or `<memory>`) of the image
        path: String,
        /// Decoder error message
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::ShaderSourceUnreadable { path, reason } => {
                write!(f, "Cannot read shader source '{}': {}", path, reason)
            }
            Error::ShaderCompilationFailed { stage, log } => {
                write!(f, "Cannot compile the {} shader: {}", stage, log)
            }
            Error::ShaderLinkFailed(log) => write!(f, "Cannot link the shader program: {}", log),
            Error::TextureLoadFailed { path, reason } => {
                write!(f, "Failed to load texture '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build an `Error::BackendError` from the same message
///
/// # Example
///
/// ```no_run
/// use lumen_3d::engine_err;
///
/// let err = engine_err!("lumen3d::gl", "glCreateShader failed: {}", "out of handles");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::lumen3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::lumen3d::Error::BackendError(message)
    }};
}

/// Log an ERROR and return early with an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// use lumen_3d::engine_bail;
///
/// fn check(unit: u32) -> lumen_3d::lumen3d::Result<()> {
///     if unit > 15 {
///         engine_bail!("lumen3d::gl", "texture unit {} out of range", unit);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
