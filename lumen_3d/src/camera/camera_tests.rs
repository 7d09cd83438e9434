use glam::{Vec3, Vec4};
use super::*;

const EPS: f32 = 1e-5;

fn default_camera() -> Camera {
    Camera::new(CameraConfig::default()).unwrap()
}

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn assert_orthonormal(camera: &Camera) {
    assert!((camera.front().length() - 1.0).abs() < EPS);
    assert!((camera.right().length() - 1.0).abs() < EPS);
    assert!((camera.up().length() - 1.0).abs() < EPS);
    assert!(camera.front().dot(camera.right()).abs() < EPS);
    assert!(camera.front().dot(camera.up()).abs() < EPS);
    assert!(camera.right().dot(camera.up()).abs() < EPS);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new_defaults() {
    let camera = default_camera();

    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_eq!(camera.fov(), 45.0);
    assert_eq!(camera.movement_speed(), 2.5);
    assert_eq!(camera.mouse_sensitivity(), 0.1);
    assert_eq!(camera.clip_planes(), (0.1, 100.0));
}

#[test]
fn test_default_orientation_looks_down_negative_z() {
    let camera = default_camera();

    assert_vec3_near(camera.front(), Vec3::new(0.0, 0.0, -1.0));
    assert_vec3_near(camera.right(), Vec3::X);
    assert_vec3_near(camera.up(), Vec3::Y);
}

#[test]
fn test_camera_new_clamps_initial_pitch() {
    let config = CameraConfig { pitch: 120.0, ..CameraConfig::default() };
    let camera = Camera::new(config).unwrap();

    assert_eq!(camera.pitch(), 89.0);
    assert_orthonormal(&camera);
}

#[test]
fn test_camera_new_rejects_invalid_config() {
    let config = CameraConfig { near: 0.0, ..CameraConfig::default() };
    let result = Camera::new(config);

    assert!(matches!(result, Err(crate::lumen3d::Error::InvalidParameter(_))));
}

#[test]
fn test_camera_new_rejects_view_parallel_to_world_up() {
    // Looking along +X with world up = +X
    let config = CameraConfig {
        world_up: Vec3::X,
        yaw: 0.0,
        ..CameraConfig::default()
    };

    assert!(Camera::new(config).is_err());
}

// ============================================================================
// rotate
// ============================================================================

#[test]
fn test_rotate_applies_sensitivity() {
    let mut camera = default_camera();
    camera.rotate(100.0, 50.0);

    assert!((camera.yaw() - (-80.0)).abs() < EPS);
    assert!((camera.pitch() - 5.0).abs() < EPS);
}

#[test]
fn test_rotate_pitch_is_clamped() {
    let mut camera = default_camera();

    for y_offset in [10_000.0, -3.0, 900.0, -50_000.0, 1e9, -1e9, 0.5] {
        camera.rotate(0.0, y_offset);
        assert!(camera.pitch() <= 89.0);
        assert!(camera.pitch() >= -89.0);
    }

    camera.rotate(0.0, 10_000.0);
    assert_eq!(camera.pitch(), 89.0);
    camera.rotate(0.0, -10_000.0);
    assert_eq!(camera.pitch(), -89.0);
}

#[test]
fn test_rotate_keeps_basis_orthonormal() {
    let mut camera = default_camera();

    let offsets = [
        (12.0, 3.0),
        (-400.0, 250.0),
        (1234.5, -987.0),
        (0.0, 10_000.0),
        (77.0, -10_000.0),
        (-3600.0, 42.0),
    ];
    for (x, y) in offsets {
        camera.rotate(x, y);
        assert_orthonormal(&camera);
    }
}

#[test]
fn test_rotate_up_tilts_front_upwards() {
    let mut camera = default_camera();
    camera.rotate(0.0, 450.0); // +45°

    let expected = Vec3::new(0.0, 45_f32.to_radians().sin(), -45_f32.to_radians().cos());
    assert_vec3_near(camera.front(), expected);
}

#[test]
fn test_rotate_ignores_non_finite_offsets() {
    let mut camera = default_camera();
    camera.rotate(f32::NAN, 1.0);
    camera.rotate(1.0, f32::INFINITY);

    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
}

#[test]
fn test_set_orientation_parallel_to_world_up_is_rejected() {
    let config = CameraConfig {
        world_up: Vec3::X,
        yaw: 90.0,
        ..CameraConfig::default()
    };
    let mut camera = Camera::new(config).unwrap();
    let front_before = camera.front();

    camera.set_orientation(0.0, 0.0);

    assert_eq!(camera.yaw(), 90.0);
    assert_eq!(camera.front(), front_before);
}

// ============================================================================
// translate
// ============================================================================

#[test]
fn test_translate_forward_and_backward() {
    let mut camera = default_camera();

    camera.translate(CameraMovement::Forward, 1.0);
    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 0.5));

    camera.translate(CameraMovement::Backward, 2.0);
    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 5.5));
}

#[test]
fn test_translate_left_and_right() {
    let mut camera = default_camera();

    camera.translate(CameraMovement::Right, 0.4);
    assert_vec3_near(camera.position(), Vec3::new(1.0, 0.0, 3.0));

    camera.translate(CameraMovement::Left, 0.8);
    assert_vec3_near(camera.position(), Vec3::new(-1.0, 0.0, 3.0));
}

#[test]
fn test_translate_scales_with_speed() {
    let mut camera = default_camera();
    camera.set_movement_speed(10.0);
    camera.translate(CameraMovement::Forward, 0.1);

    assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, 2.0));
}

// ============================================================================
// zoom
// ============================================================================

#[test]
fn test_zoom_adjusts_fov() {
    let mut camera = default_camera();
    camera.zoom(-5.0);
    assert_eq!(camera.fov(), 40.0);
    camera.zoom(3.0);
    assert_eq!(camera.fov(), 43.0);
}

#[test]
fn test_zoom_saturates_at_minimum() {
    let mut camera = default_camera();
    for _ in 0..5 {
        camera.zoom(-100.0);
        assert_eq!(camera.fov(), 1.0);
    }
}

#[test]
fn test_zoom_saturates_at_maximum() {
    let mut camera = default_camera();
    for _ in 0..5 {
        camera.zoom(100.0);
        assert_eq!(camera.fov(), 60.0);
    }
}

#[test]
fn test_zoom_stays_in_range() {
    let mut camera = default_camera();
    for delta in [0.3, -17.0, 250.0, -0.01, -1e6, 13.0, f32::NAN] {
        camera.zoom(delta);
        assert!(camera.fov() >= 1.0 && camera.fov() <= 60.0);
    }
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_matrix_maps_position_to_origin() {
    let mut camera = default_camera();
    camera.set_position(Vec3::new(4.0, -2.0, 7.5));
    camera.rotate(321.0, -123.0);

    let p = camera.view_matrix() * camera.position().extend(1.0);
    assert!(p.truncate().abs_diff_eq(Vec3::ZERO, 1e-4));
    assert!((p.w - 1.0).abs() < EPS);
}

#[test]
fn test_view_matrix_puts_front_on_negative_z() {
    let mut camera = default_camera();
    camera.rotate(-250.0, 130.0);

    let ahead = camera.position() + camera.front() * 5.0;
    let p = camera.view_matrix() * ahead.extend(1.0);
    assert!(p.truncate().abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));
}

#[test]
fn test_projection_matrix_depth_range() {
    let camera = default_camera();
    let proj = camera.projection_matrix(800.0 / 600.0);

    let near = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn test_projection_matrix_follows_fov() {
    let mut camera = default_camera();
    let wide = camera.projection_matrix(1.0);
    camera.zoom(-20.0);
    let narrow = camera.projection_matrix(1.0);

    // Narrower fov => larger focal scale
    assert!(narrow.y_axis.y > wide.y_axis.y);
    assert!((wide.y_axis.y - 1.0 / (22.5_f32.to_radians().tan())).abs() < 1e-4);
}

#[test]
fn test_view_projection_matrix() {
    let camera = default_camera();
    let expected = camera.projection_matrix(1.5) * camera.view_matrix();

    assert_eq!(camera.view_projection_matrix(1.5), expected);
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_negative_speed_and_sensitivity_are_zeroed() {
    let mut camera = default_camera();
    camera.set_movement_speed(-3.0);
    camera.set_mouse_sensitivity(-1.0);

    assert_eq!(camera.movement_speed(), 0.0);
    assert_eq!(camera.mouse_sensitivity(), 0.0);
}

// ============================================================================
// CameraConfig::validate
// ============================================================================

#[test]
fn test_config_default_is_valid() {
    assert!(CameraConfig::default().validate().is_ok());
}

#[test]
fn test_config_rejects_bad_values() {
    let base = CameraConfig::default();
    let bad = [
        CameraConfig { world_up: Vec3::ZERO, ..base },
        CameraConfig { position: Vec3::new(f32::NAN, 0.0, 0.0), ..base },
        CameraConfig { far: 0.05, ..base },
        CameraConfig { fov: 75.0, ..base },
        CameraConfig { fov_min: 30.0, fov_max: 20.0, ..base },
        CameraConfig { pitch_limit: 90.0, ..base },
        CameraConfig { movement_speed: -1.0, ..base },
        CameraConfig { yaw: f32::INFINITY, ..base },
    ];

    for config in bad {
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("CameraConfig"));
    }
}
