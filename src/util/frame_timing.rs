use web_time::Instant;

use crate::schedule::FrameTime;

/// Largest frame delta handed to tasks, in seconds.
///
/// A stall (debugger break, window drag) would otherwise complete a whole
/// blend in a single frame.
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Frame clock producing per-frame delta and elapsed simulated time.
///
/// Either measure wall time with [`tick`](Self::tick) or drive it at a fixed
/// step with [`advance`](Self::advance).
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Simulated seconds since the clock was created
    elapsed: f32,
    /// Upper bound applied to each delta
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock starting at zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed: 0.0,
            max_delta: DEFAULT_MAX_DELTA,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the per-frame delta clamp.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Measure wall time since the previous frame and advance by it.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(delta)
    }

    /// Advance by an explicit delta (fixed-step simulation, tests).
    pub fn advance(&mut self, delta: f32) -> FrameTime {
        let delta = delta.clamp(0.0, self.max_delta);
        self.elapsed += delta;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime {
            delta,
            elapsed: self.elapsed,
        }
    }

    /// Simulated seconds since creation.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
