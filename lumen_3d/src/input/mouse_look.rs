/// Converts absolute cursor positions into look offsets.

/// Tracks the previous cursor position.
///
/// The first sample only records the position and yields a zero offset, so
/// the camera does not jump when the cursor enters the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset from the previous sample, in pixels.
    ///
    /// x grows to the right. y is inverted (window y grows downward,
    /// pitch grows upward).
    pub fn offset(&mut self, x: f64, y: f64) -> (f32, f32) {
        let (x, y) = (x as f32, y as f32);
        let offset = match self.last {
            Some((last_x, last_y)) => (x - last_x, last_y - y),
            None => (0.0, 0.0),
        };
        self.last = Some((x, y));
        offset
    }

    /// Forget the previous sample (cursor left or focus lost)
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Last recorded cursor position
    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.last
    }
}

#[cfg(test)]
#[path = "mouse_look_tests.rs"]
mod tests;
