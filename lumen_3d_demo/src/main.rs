//! Lumen 3D demo: ten textured cubes and a first-person camera.
//!
//! WASD moves, the mouse looks around, the wheel zooms, Escape quits.

mod app;
mod demo_config;

use lumen_3d::lumen3d::log::{self, DefaultLogger};
use lumen_3d::lumen3d::{Error, Result};
use lumen_3d::engine_error;
use winit::event_loop::{ControlFlow, EventLoop};
use app::App;
use demo_config::DemoConfig;

fn run() -> Result<()> {
    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    log::set_logger(DefaultLogger { min_severity: config.log_severity });

    let event_loop = EventLoop::new()
        .map_err(|e| Error::InitializationFailed(format!("Failed to create event loop: {}", e)))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::BackendError(format!("Event loop error: {}", e)))?;

    app.into_result()
}

fn main() {
    if let Err(e) = run() {
        engine_error!("lumen3d::Demo", "{}", e);
        std::process::exit(1);
    }
}
