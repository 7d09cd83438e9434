//! Unit tests for DemoConfig argument parsing

use super::*;

fn parse(args: &[&str]) -> Result<DemoConfig> {
    DemoConfig::from_args(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_defaults() {
    let config = parse(&[]).unwrap();
    assert_eq!(config.orbiting_cubes, 0);
    assert!(!config.orbit_camera);
    assert!(config.grab_cursor);
    assert!(config.renderer.vsync);
    assert_eq!(config.log_severity, LogSeverity::Info);
    assert!(config.assets.textures[0].path.ends_with("assets/container.png"));
    assert!(config.assets.textures[1].path.ends_with("assets/awesomeface.png"));
}

#[test]
fn test_default_assets_follow_working_directory() {
    let config = parse(&[]).unwrap();
    assert_eq!(config.assets.vertex_shader, PathBuf::from("./vertex_shader.glsl"));
    assert_eq!(config.assets.fragment_shader, PathBuf::from("./fragment_shader.glsl"));
    assert_eq!(config.assets.textures[0].path, PathBuf::from("./assets/container.png"));
    assert!(!config.assets.vertex_shader.is_absolute());
}

#[test]
fn test_asset_dir() {
    let config = parse(&["/opt/lumen"]).unwrap();
    assert_eq!(config.assets.vertex_shader, PathBuf::from("/opt/lumen/vertex_shader.glsl"));
    assert_eq!(config.assets.textures[0].path, PathBuf::from("/opt/lumen/assets/container.png"));
}

#[test]
fn test_flags() {
    let config = parse(&["--orbits", "3", "--orbit-camera", "--no-vsync", "--no-grab", "--verbose"]).unwrap();
    assert_eq!(config.orbiting_cubes, 3);
    assert!(config.orbit_camera);
    assert!(!config.renderer.vsync);
    assert!(!config.grab_cursor);
    assert_eq!(config.log_severity, LogSeverity::Debug);
}

#[test]
fn test_orbits_requires_value() {
    assert!(matches!(parse(&["--orbits"]), Err(Error::InvalidParameter(_))));
    assert!(matches!(parse(&["--orbits", "many"]), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_unknown_flag() {
    match parse(&["--fullscreen"]) {
        Err(Error::InvalidParameter(msg)) => assert!(msg.contains("--fullscreen")),
        other => panic!("expected InvalidParameter, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_shipped_assets_exist() {
    let config = DemoConfig {
        assets: demo_assets(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
        ..DemoConfig::default()
    };
    assert!(config.assets.vertex_shader.is_file());
    assert!(config.assets.fragment_shader.is_file());
    for texture in &config.assets.textures {
        assert!(texture.path.is_file(), "{}", texture.path.display());
    }
}
