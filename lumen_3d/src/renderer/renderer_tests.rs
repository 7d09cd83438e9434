//! Unit tests for renderer.rs

use super::*;

#[test]
fn test_renderer_config_default() {
    let config = RendererConfig::default();
    assert_eq!(config.title, "Hello from OpenGL");
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.gl_version, (3, 3));
    assert!(config.vsync);
    assert_eq!(config.depth_bits, 24);
}

#[test]
fn test_aspect_ratio() {
    assert_eq!(aspect_ratio(800, 600), Some(800.0 / 600.0));
    assert_eq!(aspect_ratio(1, 1), Some(1.0));
}

#[test]
fn test_aspect_ratio_minimized() {
    assert_eq!(aspect_ratio(0, 0), None);
    assert_eq!(aspect_ratio(0, 10), None);
    assert_eq!(aspect_ratio(10, 0), None);
}

#[test]
fn test_renderer_stats_default() {
    let stats = RendererStats::default();
    assert_eq!(stats.draw_calls, 0);
    assert_eq!(stats.vertices, 0);
    assert_eq!(stats.frames, 0);
}
