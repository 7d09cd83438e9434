/// CameraConfig — initial pose and tuning of a first-person camera.

use glam::Vec3;
use crate::error::{Error, Result};

/// Initial pose and tuning values for `Camera::new`.
///
/// Angles are in degrees. The defaults reproduce the classic
/// "ten textured cubes" setup: camera at (0, 0, 3) looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// World-space position
    pub position: Vec3,
    /// World up direction (does not need to be normalized)
    pub world_up: Vec3,
    /// Horizontal angle, -90° looks down -Z
    pub yaw: f32,
    /// Vertical angle
    pub pitch: f32,
    /// Vertical field of view
    pub fov: f32,
    /// Translation speed in units per second
    pub movement_speed: f32,
    /// Degrees per cursor pixel
    pub mouse_sensitivity: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Smallest field of view reachable by zooming
    pub fov_min: f32,
    /// Largest field of view reachable by zooming
    pub fov_max: f32,
    /// Pitch is clamped to [-pitch_limit, pitch_limit]
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            near: 0.1,
            far: 100.0,
            fov_min: 1.0,
            fov_max: 60.0,
            pitch_limit: 89.0,
        }
    }
}

impl CameraConfig {
    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(invalid("position must be finite"));
        }
        if !self.world_up.is_finite() || self.world_up.length_squared() <= f32::EPSILON {
            return Err(invalid("world_up must be a finite, non-zero vector"));
        }

        let scalars = [
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("fov", self.fov),
            ("movement_speed", self.movement_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("near", self.near),
            ("far", self.far),
            ("fov_min", self.fov_min),
            ("fov_max", self.fov_max),
            ("pitch_limit", self.pitch_limit),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(&format!("{} must be finite", name)));
        }

        if self.near <= 0.0 {
            return Err(invalid(&format!("near plane must be positive (got {})", self.near)));
        }
        if self.far <= self.near {
            return Err(invalid(&format!(
                "far plane ({}) must be greater than near plane ({})",
                self.far, self.near
            )));
        }
        if self.fov_min <= 0.0 || self.fov_max >= 180.0 || self.fov_min > self.fov_max {
            return Err(invalid(&format!(
                "fov range [{}, {}] must lie inside (0, 180) and be non-empty",
                self.fov_min, self.fov_max
            )));
        }
        if self.fov < self.fov_min || self.fov > self.fov_max {
            return Err(invalid(&format!(
                "fov {} is outside [{}, {}]",
                self.fov, self.fov_min, self.fov_max
            )));
        }
        if self.pitch_limit <= 0.0 || self.pitch_limit >= 90.0 {
            return Err(invalid(&format!(
                "pitch_limit must lie inside (0, 90) (got {})",
                self.pitch_limit
            )));
        }
        if self.movement_speed < 0.0 || self.mouse_sensitivity < 0.0 {
            return Err(invalid("movement_speed and mouse_sensitivity must not be negative"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidParameter(format!("CameraConfig: {}", message))
}
