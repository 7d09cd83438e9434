/// OrbitCamera — a camera circling a fixed target at constant speed.
///
/// Stateless with respect to time: the caller passes the elapsed time and
/// gets the eye position / view matrix for that instant.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};

/// Camera that circles `target` in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    height: f32,
    angular_speed: f32,
}

impl OrbitCamera {
    /// Orbit `target` at `radius`, one full turn every 2π seconds (57.3°/s).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `radius` is not a positive finite
    /// number or `target` is not finite.
    pub fn new(target: Vec3, radius: f32) -> Result<Self> {
        if !target.is_finite() {
            return Err(Error::InvalidParameter("OrbitCamera: target must be finite".to_string()));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "OrbitCamera: radius must be positive (got {})",
                radius
            )));
        }
        Ok(Self {
            target,
            radius,
            height: 0.0,
            angular_speed: 1.0_f32.to_degrees(),
        })
    }

    /// Vertical offset of the eye above the target.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Angular speed in degrees per second (negative turns clockwise).
    pub fn with_angular_speed(mut self, degrees_per_second: f32) -> Self {
        self.angular_speed = degrees_per_second;
        self
    }

    /// Eye position after `time` seconds.
    pub fn eye(&self, time: f32) -> Vec3 {
        let angle = (self.angular_speed * time).to_radians();
        self.target + Vec3::new(angle.sin() * self.radius, self.height, angle.cos() * self.radius)
    }

    /// View matrix looking from `eye(time)` at the target.
    pub fn view_matrix(&self, time: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye(time), self.target, Vec3::Y)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
#[path = "orbit_camera_tests.rs"]
mod tests;
