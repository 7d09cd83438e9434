/// Static data of the textured-cube scene

use glam::{Mat4, Vec3};
use crate::renderer::Vertex;
use crate::transform::Transform;

/// Background color (mid grey)
pub const CLEAR_COLOR: [f32; 4] = [0.53, 0.53, 0.53, 1.0];

/// Axis each cube is rotated around (normalized at use)
pub const CUBE_ROTATION_AXIS: Vec3 = Vec3::new(0.0, -0.69, 1.0);

/// Cube `i` is rotated by `i` times this angle
pub const CUBE_ROTATION_STEP_DEGREES: f32 = 90.0;

/// World positions of the ten cubes
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const fn v(x: f32, y: f32, z: f32, u: f32, t: f32) -> Vertex {
    Vertex::new([x, y, z], [u, t])
}

/// Unit cube centered on the origin: 6 faces × 2 triangles, position + uv
pub const CUBE_VERTICES: [Vertex; 36] = [
    // -Z
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v(0.5, -0.5, -0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    // +Z
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 1.0),
    v(-0.5, 0.5, 0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    // -X
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, 0.5, 1.0, 0.0),
    // +X
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, 0.5, 0.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    // -Y
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, -0.5, 1.0, 1.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(0.5, -0.5, 0.5, 1.0, 0.0),
    v(-0.5, -0.5, 0.5, 0.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    // +Y
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
    v(0.5, 0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(0.5, 0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, 0.5, 0.0, 0.0),
    v(-0.5, 0.5, -0.5, 0.0, 1.0),
];

/// Model matrix of cube `index`: translate to its position, then rotate
/// by `index × 90°` around `CUBE_ROTATION_AXIS`.
///
/// Indices past the table wrap around.
pub fn cube_model_matrix(index: usize) -> Mat4 {
    let position = CUBE_POSITIONS[index % CUBE_POSITIONS.len()];
    Transform::from_translation(position)
        .with_axis_angle(CUBE_ROTATION_AXIS, CUBE_ROTATION_STEP_DEGREES * index as f32)
        .model_matrix()
}

#[cfg(test)]
#[path = "cube_data_tests.rs"]
mod tests;
