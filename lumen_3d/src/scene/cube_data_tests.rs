//! Unit tests for the cube scene data

use glam::{Mat4, Vec4};
use super::*;

#[test]
fn test_cube_vertices_are_unit_cube() {
    assert_eq!(CUBE_VERTICES.len(), 36);
    for vertex in CUBE_VERTICES.iter() {
        assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
        assert!(vertex.uv.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn test_every_face_has_two_triangles() {
    // each face lies on one axis plane: count vertices per plane
    let mut per_face = [0usize; 6];
    for vertex in CUBE_VERTICES.chunks(6) {
        let [x, y, z] = vertex[0].position;
        let face = if vertex.iter().all(|v| v.position[2] == z) {
            if z < 0.0 { 0 } else { 1 }
        } else if vertex.iter().all(|v| v.position[0] == x) {
            if x < 0.0 { 2 } else { 3 }
        } else {
            assert!(vertex.iter().all(|v| v.position[1] == y));
            if y < 0.0 { 4 } else { 5 }
        };
        per_face[face] += 1;
    }
    assert_eq!(per_face, [1; 6]);
}

#[test]
fn test_first_cube_is_at_origin_unrotated() {
    assert!(cube_model_matrix(0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn test_model_matrix_translation() {
    for (i, position) in CUBE_POSITIONS.iter().enumerate() {
        let origin = cube_model_matrix(i) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(origin.truncate().abs_diff_eq(*position, 1e-5), "cube {}", i);
    }
}

#[test]
fn test_model_matrix_rotation_axis_is_fixed() {
    let axis = CUBE_ROTATION_AXIS.normalize();
    let model = cube_model_matrix(1);
    let rotated = model.transform_vector3(axis);
    assert!(rotated.abs_diff_eq(axis, 1e-5));
}

#[test]
fn test_full_turn_is_pure_translation() {
    // cube 4 is rotated by 360 degrees
    let model = cube_model_matrix(4);
    let expected = Mat4::from_translation(CUBE_POSITIONS[4]);
    assert!(model.abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_index_wraps_to_table() {
    let origin = cube_model_matrix(CUBE_POSITIONS.len()) * Vec4::W;
    assert!(origin.truncate().abs_diff_eq(CUBE_POSITIONS[0], 1e-5));
}

#[test]
fn test_clear_color_is_opaque_grey() {
    assert_eq!(CLEAR_COLOR[3], 1.0);
    assert_eq!(CLEAR_COLOR[0], CLEAR_COLOR[1]);
    assert_eq!(CLEAR_COLOR[1], CLEAR_COLOR[2]);
}
