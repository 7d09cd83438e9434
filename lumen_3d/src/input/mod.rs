//! Input module — routes window events into camera operations.
//!
//! Pure event bookkeeping: the demo forwards winit events here, nothing in
//! this module touches the window.

mod mouse_look;
mod camera_controller;

pub use mouse_look::MouseLook;
pub use camera_controller::{CameraController, KeyBindings, scroll_delta_lines, PIXELS_PER_LINE};
