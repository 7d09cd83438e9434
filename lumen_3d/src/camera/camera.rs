/// Camera — first-person camera driven by yaw/pitch angles.
///
/// The camera owns its orientation and derives an orthonormal basis
/// (front, right, up) from it after every change. View and projection
/// matrices are computed on demand, once per frame, by the render loop.
///
/// Pure math: no graphics context is needed to use or test it.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::camera_config::CameraConfig;

/// Direction of a keyboard translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`
    Forward,
    /// Against `front`
    Backward,
    /// Against `right`
    Left,
    /// Along `right`
    Right,
}

/// Orthonormal camera basis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Basis {
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Basis {
    /// Derive the basis from yaw/pitch (degrees).
    ///
    /// Returns `None` when `front` is parallel to `world_up`, where `right`
    /// has no defined direction.
    fn from_angles(yaw: f32, pitch: f32, world_up: Vec3) -> Option<Self> {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let front = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
        .try_normalize()?;
        let right = front.cross(world_up);
        if right.length_squared() <= f32::EPSILON {
            return None;
        }
        let right = right.normalize();
        let up = right.cross(front).normalize();
        Some(Self { front, right, up })
    }
}

/// First-person camera.
///
/// Angles are in degrees. Invariants held after every operation:
/// - `pitch` ∈ [-pitch_limit, pitch_limit]
/// - `fov` ∈ [fov_min, fov_max]
/// - `front`, `right`, `up` are unit length and mutually perpendicular
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    basis: Basis,
    fov: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    near: f32,
    far: f32,
    fov_min: f32,
    fov_max: f32,
    pitch_limit: f32,
}

impl Camera {
    /// Create a camera from a validated configuration.
    ///
    /// The configured pitch is clamped to the pitch limit.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the configuration does not
    /// validate or if the initial view direction is parallel to `world_up`.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;

        let world_up = config.world_up.normalize();
        let pitch = config.pitch.clamp(-config.pitch_limit, config.pitch_limit);
        let basis = Basis::from_angles(config.yaw, pitch, world_up).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "CameraConfig: view direction (yaw {}, pitch {}) is parallel to world_up {}",
                config.yaw, pitch, world_up
            ))
        })?;

        Ok(Self {
            position: config.position,
            world_up,
            yaw: config.yaw,
            pitch,
            basis,
            fov: config.fov,
            movement_speed: config.movement_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            near: config.near,
            far: config.far,
            fov_min: config.fov_min,
            fov_max: config.fov_max,
            pitch_limit: config.pitch_limit,
        })
    }

    // ===== OPERATIONS =====

    /// Turn the camera by cursor offsets (pixels).
    ///
    /// yaw += x_offset × sensitivity, pitch += y_offset × sensitivity,
    /// then pitch is clamped and the basis recomputed. Non-finite offsets
    /// are ignored.
    pub fn rotate(&mut self, x_offset: f32, y_offset: f32) {
        if !x_offset.is_finite() || !y_offset.is_finite() {
            crate::engine_debug!("lumen3d::Camera", "Ignoring non-finite rotation ({}, {})", x_offset, y_offset);
            return;
        }

        let yaw = self.yaw + x_offset * self.mouse_sensitivity;
        let pitch = (self.pitch + y_offset * self.mouse_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.set_orientation(yaw, pitch);
    }

    /// Set yaw/pitch directly (degrees). Pitch is clamped.
    ///
    /// If the new direction is parallel to `world_up`, the orientation is
    /// left unchanged and a warning is logged.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        let pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
        match Basis::from_angles(yaw, pitch, self.world_up) {
            Some(basis) => {
                self.yaw = yaw;
                self.pitch = pitch;
                self.basis = basis;
            }
            None => {
                crate::engine_warn!(
                    "lumen3d::Camera",
                    "Orientation (yaw {}, pitch {}) is parallel to world up {}, keeping (yaw {}, pitch {})",
                    yaw, pitch, self.world_up, self.yaw, self.pitch
                );
            }
        }
    }

    /// Move along `front` or `right` by movement_speed × delta_time.
    pub fn translate(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.basis.front * velocity,
            CameraMovement::Backward => self.position -= self.basis.front * velocity,
            CameraMovement::Left => self.position -= self.basis.right * velocity,
            CameraMovement::Right => self.position += self.basis.right * velocity,
        }
    }

    /// Widen (positive delta) or narrow (negative delta) the field of view.
    ///
    /// The result is clamped to [fov_min, fov_max].
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.fov = (self.fov + delta).clamp(self.fov_min, self.fov_max);
    }

    /// Look-at view matrix (world → view space, right-handed).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.basis.front, self.basis.up)
    }

    /// Perspective projection (view → OpenGL clip space, z in [-1, 1]).
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, self.near, self.far)
    }

    /// Combined projection × view matrix.
    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    /// Unit vector to the camera's right.
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Unit up vector of the camera (perpendicular to front and right).
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Normalized world up.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Near and far clipping distances.
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    // ===== SETTERS =====

    /// Teleport the camera.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Negative values are treated as zero.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.max(0.0);
    }

    /// Negative values are treated as zero.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity.max(0.0);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
