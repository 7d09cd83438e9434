/// Frame timing: delta time between rendered frames and total elapsed time.

use std::time::{Duration, Instant};

/// Longest delta a single tick reports (a stalled frame does not teleport the camera)
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Measures time between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    delta: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose first frame starts at `now`
    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            delta: 0.0,
            frame_count: 0,
        }
    }

    /// Start a new frame now and return its delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Start a new frame at `now` and return its delta in seconds.
    ///
    /// Instants earlier than the previous tick give a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);
        self.delta = elapsed.as_secs_f32().min(MAX_FRAME_DELTA);
        self.frame_count += 1;
        self.delta
    }

    /// Delta of the last tick, in seconds
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Time since the clock was created, up to the last tick
    pub fn elapsed(&self) -> Duration {
        self.last.duration_since(self.start)
    }

    /// Elapsed time in seconds (shader/animation time)
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
