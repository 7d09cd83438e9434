//! Camera module — first-person and orbit cameras.
//!
//! Cameras are plain owned values. The render loop and the input
//! controller borrow them; nothing here is global.

mod camera;
mod camera_config;
mod orbit_camera;

pub use camera::{Camera, CameraMovement};
pub use camera_config::CameraConfig;
pub use orbit_camera::OrbitCamera;
