/// CameraController — keyboard, cursor and wheel handling for a `Camera`.
///
/// Window events only update controller state (pressed keys, last cursor
/// position). Movement is applied once per frame in `update`, scaled by the
/// frame's delta time.

use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;
use crate::camera::{Camera, CameraMovement};
use super::MouseLook;

/// Pixels of a touchpad scroll counted as one wheel line
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Vertical wheel movement in lines (positive = away from the user)
pub fn scroll_delta_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}

/// Keys that move the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }
}

impl KeyBindings {
    fn movements(&self) -> [(KeyCode, CameraMovement); 4] {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraController {
    bindings: KeyBindings,
    pressed: FxHashSet<KeyCode>,
    mouse: MouseLook,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    // ===== EVENTS =====

    /// Record a key press or release
    pub fn key_changed(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(key);
            }
            ElementState::Released => {
                self.pressed.remove(&key);
            }
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget every pressed key and the last cursor sample (focus lost)
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.mouse.reset();
    }

    /// Turn the camera toward a new absolute cursor position
    pub fn cursor_moved(&mut self, camera: &mut Camera, x: f64, y: f64) {
        let (x_offset, y_offset) = self.mouse.offset(x, y);
        if x_offset != 0.0 || y_offset != 0.0 {
            camera.rotate(x_offset, y_offset);
        }
    }

    /// Turn the camera by a raw pointer delta (unbounded, grabbed cursor).
    ///
    /// `dy` grows downward, like window coordinates.
    pub fn mouse_motion(&mut self, camera: &mut Camera, dx: f64, dy: f64) {
        if dx != 0.0 || dy != 0.0 {
            camera.rotate(dx as f32, -dy as f32);
        }
    }

    /// Cursor left the window: the next sample starts fresh
    pub fn cursor_left(&mut self) {
        self.mouse.reset();
    }

    /// Wheel up narrows the field of view, wheel down widens it
    pub fn scroll(&mut self, camera: &mut Camera, lines: f32) {
        camera.zoom(-lines);
    }

    // ===== PER FRAME =====

    /// Move the camera for every held movement key.
    ///
    /// Opposite keys held together cancel out.
    pub fn update(&self, camera: &mut Camera, delta_time: f32) {
        for (key, movement) in self.bindings.movements() {
            if self.is_pressed(key) {
                camera.translate(movement, delta_time);
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_controller_tests.rs"]
mod tests;
