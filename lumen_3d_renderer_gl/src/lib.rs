/*!
# Lumen 3D - OpenGL Renderer Backend

OpenGL 3.3 core implementation of the Lumen 3D `Renderer` trait.

The window and GL context are created with glutin / glutin-winit, GL calls
go through glow. Shader programs, textures and meshes live in slot maps
and are deleted when the renderer is dropped.

# Example

```no_run
use lumen_3d::lumen3d::render::RendererConfig;
use lumen_3d_renderer_gl::GlRenderer;
use winit::event_loop::ActiveEventLoop;

fn resumed(event_loop: &ActiveEventLoop) -> lumen_3d::lumen3d::Result<GlRenderer> {
    GlRenderer::new(event_loop, &RendererConfig::default())
}
```
*/

mod gl_context;
mod gl_format;
mod gl_shader;
mod gl_texture;
mod gl_mesh;
mod gl_renderer;

pub use gl_context::GlContext;
pub use gl_renderer::GlRenderer;
