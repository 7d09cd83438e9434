/// DemoConfig - settings of the demo binary, built from the command line
///
/// ```text
/// lumen_3d_demo [ASSET_DIR] [--orbits N] [--orbit-camera] [--no-vsync] [--no-grab] [--verbose]
/// ```
///
/// `ASSET_DIR` defaults to the working directory.

use std::path::PathBuf;
use lumen_3d::lumen3d::{Error, Result};
use lumen_3d::lumen3d::camera::CameraConfig;
use lumen_3d::lumen3d::log::LogSeverity;
use lumen_3d::lumen3d::render::RendererConfig;
use lumen_3d::lumen3d::scene::SceneAssets;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub renderer: RendererConfig,
    pub camera: CameraConfig,
    pub assets: SceneAssets,
    /// Small cubes circling the first cube
    pub orbiting_cubes: u32,
    pub orbit_radius: f32,
    /// Degrees per second
    pub orbit_speed: f32,
    /// View the scene from an orbiting camera instead of the first-person one
    pub orbit_camera: bool,
    /// Hide the cursor and keep it inside the window
    pub grab_cursor: bool,
    pub log_severity: LogSeverity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            renderer: RendererConfig::default(),
            camera: CameraConfig::default(),
            // Relative to the working directory, like the shader paths
            assets: demo_assets(PathBuf::from(".")),
            orbiting_cubes: 0,
            orbit_radius: 1.6,
            orbit_speed: 45.0,
            orbit_camera: false,
            grab_cursor: true,
            log_severity: LogSeverity::Info,
        }
    }
}

/// Scene assets under `root`, with the PNG crate texture shipped in `assets/`
pub fn demo_assets(root: PathBuf) -> SceneAssets {
    let mut assets = SceneAssets::in_dir(&root);
    assets.textures[0].path = root.join("assets").join("container.png");
    assets
}

impl DemoConfig {
    /// Parse arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for unknown flags or malformed values.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--orbits" => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::InvalidParameter("--orbits needs a count".to_string()))?;
                    config.orbiting_cubes = value.parse().map_err(|_| {
                        Error::InvalidParameter(format!("--orbits: '{}' is not a count", value))
                    })?;
                }
                "--orbit-camera" => config.orbit_camera = true,
                "--no-vsync" => config.renderer.vsync = false,
                "--no-grab" => config.grab_cursor = false,
                "--verbose" => config.log_severity = LogSeverity::Debug,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidParameter(format!("unknown option '{}'", flag)));
                }
                dir => config.assets = demo_assets(PathBuf::from(dir)),
            }
        }

        config.camera.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "demo_config_tests.rs"]
mod tests;
