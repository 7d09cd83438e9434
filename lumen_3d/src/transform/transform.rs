/// Transform — translation, rotation and scale of a model.

use glam::{Mat4, Quat, Vec3};

/// Translation / rotation / scale, composed as T · R · S.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space translation
    pub translation: Vec3,
    /// Orientation
    pub rotation: Quat,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Rotate by `degrees` around `axis`. The axis is normalized here;
    /// a zero axis leaves the rotation unchanged.
    pub fn with_axis_angle(mut self, axis: Vec3, degrees: f32) -> Self {
        if let Some(axis) = axis.try_normalize() {
            self.rotation = Quat::from_axis_angle(axis, degrees.to_radians()) * self.rotation;
        }
        self
    }

    /// Uniform scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Model matrix (object → world).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
