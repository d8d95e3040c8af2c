//! Frame clock producing a frame-rate independent delta factor

use snowfall_core::ClockConfig;

/// Tracks the previous frame timestamp and converts elapsed wall-clock time
/// into a multiplier relative to a baseline frame duration.
///
/// A factor of `1.0` means "exactly one baseline frame elapsed". Per-frame
/// rates in the simulation are tuned against that baseline.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Duration of one baseline frame in milliseconds
    pub baseline_frame_ms: f64,
    /// Elapsed time is clamped to this before conversion
    pub max_frame_ms: f64,
    /// Timestamp of the previous tick, `None` until the first one
    last_time: Option<f64>,
    /// Number of ticks since the last reset
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(&ClockConfig::default())
    }
}

impl FrameClock {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            baseline_frame_ms: config.baseline_frame_ms,
            max_frame_ms: config.max_frame_ms,
            last_time: None,
            frames: 0,
        }
    }

    /// Forget the previous timestamp. The next tick reports one baseline frame.
    pub fn reset(&mut self) {
        self.last_time = None;
        self.frames = 0;
    }

    /// Advance the clock to `now_ms` and return the elapsed-time factor.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.frames += 1;
        let Some(last) = self.last_time.replace(now_ms) else {
            return 1.0;
        };

        // Clamp to avoid huge jumps after the host stalled (background tab etc.)
        let elapsed = (now_ms - last).clamp(0.0, self.max_frame_ms);
        (elapsed / self.baseline_frame_ms) as f32
    }

    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
