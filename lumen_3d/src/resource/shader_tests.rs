//! Unit tests for shader.rs

use std::fs;
use std::path::PathBuf;
use super::*;

/// Write `contents` to a uniquely named file in the temp dir
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lumen3d_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_shader_source_new() {
    let source = ShaderSource::new("void main() {}", String::from("void main() { }"));

    assert_eq!(source.stage(ShaderStage::Vertex), "void main() {}");
    assert_eq!(source.stage(ShaderStage::Fragment), "void main() { }");
}

#[test]
fn test_shader_source_from_files() {
    let vertex = temp_file("ok.vert", "#version 330 core\nvoid main() {}\n");
    let fragment = temp_file("ok.frag", "#version 330 core\nout vec4 c;\nvoid main() { c = vec4(1.0); }\n");

    let source = ShaderSource::from_files(&vertex, &fragment).unwrap();
    assert!(source.vertex.starts_with("#version 330 core"));
    assert!(source.fragment.contains("out vec4 c;"));

    fs::remove_file(vertex).ok();
    fs::remove_file(fragment).ok();
}

#[test]
fn test_shader_source_missing_file_names_path() {
    let vertex = temp_file("present.vert", "void main() {}");
    let missing = std::env::temp_dir().join("lumen3d_definitely_missing.frag");

    let err = ShaderSource::from_files(&vertex, &missing).unwrap_err();
    match err {
        crate::lumen3d::Error::ShaderSourceUnreadable { path, .. } => {
            assert!(path.ends_with("lumen3d_definitely_missing.frag"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    fs::remove_file(vertex).ok();
}

#[test]
fn test_shader_source_empty_file_is_rejected() {
    let vertex = temp_file("blank.vert", "  \n\t\n");
    let fragment = temp_file("blank_ok.frag", "void main() {}");

    let err = ShaderSource::from_files(&vertex, &fragment).unwrap_err();
    assert!(format!("{}", err).contains("file is empty"));

    fs::remove_file(vertex).ok();
    fs::remove_file(fragment).ok();
}

#[test]
fn test_shader_stage_display() {
    assert_eq!(format!("{}", ShaderStage::Vertex), "vertex");
    assert_eq!(format!("{}", ShaderStage::Fragment), "fragment");
}

#[test]
fn test_uniform_names() {
    assert_eq!(uniforms::MODEL, "model");
    assert_eq!(uniforms::VIEW, "view");
    assert_eq!(uniforms::PROJECTION, "perspective");
    assert_eq!(uniforms::TEXTURE_1, "ourTexture1");
    assert_eq!(uniforms::TEXTURE_2, "ourTexture2");
}
