/// Orbit — circular motion of a body around a center.
///
/// Used for "planet around a sun" style scenes: the body position is a
/// pure function of elapsed time, so no per-frame state is stored.

use glam::{Mat4, Quat, Vec3};
use crate::error::{Error, Result};

/// Circular orbit in the plane perpendicular to `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    center: Vec3,
    radius: f32,
    axis: Vec3,
    angular_speed: f32,
    phase: f32,
    spin_speed: f32,
    scale: f32,
}

impl Orbit {
    /// Orbit around `center` at `radius` in the XZ plane (axis +Y),
    /// 30°/s, no phase, no spin, unit scale.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for a non-finite center or a
    /// negative / non-finite radius. A zero radius is allowed (body pinned
    /// to the center, e.g. a sun).
    pub fn new(center: Vec3, radius: f32) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidParameter("Orbit: center must be finite".to_string()));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Orbit: radius must be a non-negative number (got {})",
                radius
            )));
        }
        Ok(Self {
            center,
            radius,
            axis: Vec3::Y,
            angular_speed: 30.0,
            phase: 0.0,
            spin_speed: 0.0,
            scale: 1.0,
        })
    }

    /// Orbit plane normal.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for a zero or non-finite axis.
    pub fn with_axis(mut self, axis: Vec3) -> Result<Self> {
        self.axis = axis
            .try_normalize()
            .ok_or_else(|| Error::InvalidParameter(format!("Orbit: axis {} cannot be normalized", axis)))?;
        Ok(self)
    }

    /// Degrees per second around the orbit axis.
    pub fn with_angular_speed(mut self, degrees_per_second: f32) -> Self {
        self.angular_speed = degrees_per_second;
        self
    }

    /// Starting angle in degrees.
    pub fn with_phase(mut self, degrees: f32) -> Self {
        self.phase = degrees;
        self
    }

    /// Rotation of the body around its own axis, degrees per second.
    pub fn with_spin_speed(mut self, degrees_per_second: f32) -> Self {
        self.spin_speed = degrees_per_second;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Angle travelled along the orbit after `time` seconds (degrees).
    pub fn angle(&self, time: f32) -> f32 {
        self.phase + self.angular_speed * time
    }

    /// Body position after `time` seconds.
    pub fn position(&self, time: f32) -> Vec3 {
        let rotation = Quat::from_axis_angle(self.axis, self.angle(time).to_radians());
        self.center + rotation * (self.reference_direction() * self.radius)
    }

    /// Model matrix: translate to `position(time)`, spin, scale.
    pub fn model_matrix(&self, time: f32) -> Mat4 {
        let spin = Quat::from_axis_angle(self.axis, (self.spin_speed * time).to_radians());
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), spin, self.position(time))
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Unit vector in the orbit plane where angle 0 lies.
    ///
    /// +X for the default axis; for other axes, +X projected onto the plane
    /// (or +Z when the axis is X itself).
    fn reference_direction(&self) -> Vec3 {
        let seed = if self.axis.dot(Vec3::X).abs() > 0.999 { Vec3::Z } else { Vec3::X };
        (seed - self.axis * seed.dot(self.axis)).normalize()
    }
}

#[cfg(test)]
#[path = "orbit_tests.rs"]
mod tests;
