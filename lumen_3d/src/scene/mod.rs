//! Scene module — the textured-cube scene.
//!
//! Static geometry and layout live in `cube_data`; `CubeScene` owns the GPU
//! handles and replays the per-frame draw sequence through a `Renderer`.

mod cube_data;
mod cube_scene;

pub use cube_data::{
    CUBE_VERTICES, CUBE_POSITIONS, CUBE_ROTATION_AXIS, CUBE_ROTATION_STEP_DEGREES,
    CLEAR_COLOR, cube_model_matrix,
};
pub use cube_scene::{CubeScene, SceneAssets, TextureAsset};
