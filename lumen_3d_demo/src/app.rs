/// Demo application - winit event handling and the per-frame loop

use lumen_3d::glam::Vec3;
use lumen_3d::lumen3d::{Error, Renderer, Result};
use lumen_3d::lumen3d::camera::{Camera, OrbitCamera};
use lumen_3d::lumen3d::input::{scroll_delta_lines, CameraController};
use lumen_3d::lumen3d::render::aspect_ratio;
use lumen_3d::lumen3d::scene::{CubeScene, CUBE_POSITIONS};
use lumen_3d::lumen3d::time::FrameClock;
use lumen_3d::lumen3d::transform::Orbit;
use lumen_3d::{engine_debug, engine_info, engine_warn};
use lumen_3d_renderer_gl::GlRenderer;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};
use crate::demo_config::DemoConfig;

/// Frames between two statistics log lines
const STATS_INTERVAL: u64 = 600;

/// Everything that exists once the window is up
struct DemoState {
    scene: CubeScene,
    renderer: GlRenderer,
    camera: Camera,
    controller: CameraController,
    orbit_camera: Option<OrbitCamera>,
    clock: FrameClock,
    /// Mouse look comes from raw device motion instead of cursor positions
    cursor_grabbed: bool,
    focused: bool,
}

impl DemoState {
    fn new(event_loop: &ActiveEventLoop, config: &DemoConfig) -> Result<Self> {
        let camera = Camera::new(config.camera)?;
        let mut renderer = GlRenderer::new(event_loop, &config.renderer)?;

        let orbits = orbiting_cubes(config)?;
        let scene = CubeScene::load(&mut renderer, &config.assets)?.with_orbits(orbits);

        let orbit_camera = if config.orbit_camera {
            Some(OrbitCamera::new(Vec3::new(0.0, 0.0, -5.0), 12.0)?.with_height(3.0).with_angular_speed(20.0))
        } else {
            None
        };

        let cursor_grabbed = config.grab_cursor && grab_cursor(renderer.window());

        Ok(Self {
            scene,
            renderer,
            camera,
            controller: CameraController::new(),
            orbit_camera,
            clock: FrameClock::new(),
            cursor_grabbed,
            focused: true,
        })
    }

    fn frame(&mut self) -> Result<()> {
        let delta = self.clock.tick();
        self.controller.update(&mut self.camera, delta);

        let (width, height) = self.renderer.size();
        let Some(aspect) = aspect_ratio(width, height) else {
            // minimized: nothing to draw
            return Ok(());
        };
        let time = self.clock.elapsed_secs();

        match &self.orbit_camera {
            Some(orbit) => {
                let view = orbit.view_matrix(time);
                let projection = self.camera.projection_matrix(aspect);
                self.scene.render_with(&mut self.renderer, &view, &projection, time)?;
            }
            None => self.scene.render(&mut self.renderer, &self.camera, aspect, time)?,
        }
        self.renderer.end_frame()?;

        let frames = self.clock.frame_count();
        if frames % STATS_INTERVAL == 0 {
            let stats = self.renderer.stats();
            engine_debug!(
                "lumen3d::Demo",
                "frame {}: {} draw calls, {} vertices, {:.1} ms",
                frames,
                stats.draw_calls,
                stats.vertices,
                self.clock.delta() * 1000.0
            );
        }
        Ok(())
    }
}

fn orbiting_cubes(config: &DemoConfig) -> Result<Vec<Orbit>> {
    let count = config.orbiting_cubes;
    (0..count)
        .map(|i| -> Result<Orbit> {
            Ok(Orbit::new(CUBE_POSITIONS[0], config.orbit_radius)?
                .with_axis(Vec3::new(0.2, 1.0, 0.0))?
                .with_phase(360.0 * i as f32 / count as f32)
                .with_angular_speed(config.orbit_speed)
                .with_spin_speed(90.0)
                .with_scale(0.3))
        })
        .collect()
}

/// Lock (or confine) and hide the cursor. Returns false if neither grab mode works.
fn grab_cursor(window: &Window) -> bool {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    match grabbed {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(e) => {
            engine_warn!("lumen3d::Demo", "Cannot grab the cursor, using cursor positions: {}", e);
            false
        }
    }
}

pub struct App {
    config: DemoConfig,
    state: Option<DemoState>,
    error: Option<Error>,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Stop the loop; the error is reported by `main`
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match DemoState::new(event_loop, &self.config) {
            Ok(state) => {
                engine_info!("lumen3d::Demo", "Ready: WASD to move, mouse to look, wheel to zoom, Escape to quit");
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.renderer.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: key_state,
                    ..
                },
                ..
            } => {
                if code == KeyCode::Escape && key_state == ElementState::Pressed {
                    event_loop.exit();
                } else {
                    state.controller.key_changed(code, key_state);
                }
            }
            WindowEvent::CursorMoved { position, .. } if !state.cursor_grabbed => {
                state.controller.cursor_moved(&mut state.camera, position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => state.controller.cursor_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                state.controller.scroll(&mut state.camera, scroll_delta_lines(&delta));
            }
            WindowEvent::Focused(focused) => {
                state.focused = focused;
                if !focused {
                    state.controller.release_all();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = state.frame() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if state.cursor_grabbed && state.focused {
                state.controller.mouse_motion(&mut state.camera, dx, dy);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.renderer.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GL objects must go before the context
        self.state = None;
        engine_info!("lumen3d::Demo", "Bye");
    }
}
