//! Renderer module — backend trait, resource keys, vertex layout

pub mod renderer;
pub mod vertex;

// Recording renderer for unit tests (no GPU required)
#[cfg(test)]
pub mod mock_renderer;

pub use renderer::*;
pub use vertex::*;
