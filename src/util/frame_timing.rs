//! Frame-delta derivation and smoothed FPS for hosts driving the scene
//! from a raw render-loop callback.

use web_time::Instant;

/// Longest frame delta handed to the simulation, in seconds.
///
/// A background tab or debugger pause can make the wall-clock gap between
/// callbacks arbitrarily large; clamping keeps the smoothing math stable.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Derives per-frame deltas from a monotonic clock with FPS smoothing.
pub struct DeltaClock {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl DeltaClock {
    /// Create a clock whose first `tick()` measures from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns the clamped delta since the previous
    /// call, in seconds, and updates the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        frame_time.min(MAX_FRAME_DELTA)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for DeltaClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_clamped() {
        let mut clock = DeltaClock::new();
        // Whatever the scheduler does, the delta never exceeds the clamp.
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_fps_starts_at_default() {
        let clock = DeltaClock::new();
        assert_eq!(clock.fps(), 60.0);
    }
}
