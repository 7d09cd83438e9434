/// GlContext - window, drawable surface and current OpenGL context
///
/// Created from inside winit's `resumed` callback (an `ActiveEventLoop` is
/// required to build the window).

use std::num::NonZeroU32;
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use lumen_3d::lumen3d::{Error, Result};
use lumen_3d::lumen3d::render::RendererConfig;
use lumen_3d::{engine_debug, engine_error, engine_info, engine_warn};
use raw_window_handle::HasWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Log an initialization failure and turn it into `Error::InitializationFailed`
fn init_failed(what: &str, e: impl std::fmt::Display) -> Error {
    engine_error!("lumen3d::gl", "{}: {}", what, e);
    Error::InitializationFailed(format!("{}: {}", what, e))
}

pub struct GlContext {
    /// glow function table (valid while `context` is current)
    pub(crate) gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    // Dropped last: the surface borrows the native window
    window: Window,
}

impl GlContext {
    pub fn new(event_loop: &ActiveEventLoop, config: &RendererConfig) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(config.depth_bits);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| init_failed("Failed to create window and GL config", e))?;

        let window = window.ok_or_else(|| init_failed("Failed to create window", "no window returned"))?;

        let raw_window_handle = window
            .window_handle()
            .map(|handle| handle.as_raw())
            .map_err(|e| init_failed("Failed to get window handle", e))?;

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| init_failed(&format!("Failed to create OpenGL {}.{} core context", major, minor), e))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| init_failed("Failed to build surface attributes", e))?;

        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| init_failed("Failed to create window surface", e))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| init_failed("Failed to make the GL context current", e))?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            engine_warn!("lumen3d::gl", "Cannot set swap interval: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol) as *const _)
        };

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        engine_info!("lumen3d::gl", "OpenGL context ready: {}", version);

        Ok(Self { gl, surface, context, window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Resize the drawable. Zero sizes (minimized window) are ignored.
    pub fn resize(&self, width: u32, height: u32) -> bool {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(w), Some(h)) => {
                self.surface.resize(&self.context, w, h);
                true
            }
            _ => false,
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| lumen_3d::engine_err!("lumen3d::gl", "Failed to swap buffers: {}", e))
    }
}

/// Prefer multisampled configs, then the first one found.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    let mut best: Option<Config> = None;
    for config in configs {
        best = match best {
            Some(current) if current.num_samples() >= config.num_samples() => Some(current),
            _ => Some(config),
        };
    }
    // find_configs reports an error instead of yielding nothing
    let config = best.expect("glutin returned an empty config list");
    engine_debug!(
        "lumen3d::gl",
        "Picked GL config: {} samples, depth {}",
        config.num_samples(),
        config.depth_size()
    );
    config
}
