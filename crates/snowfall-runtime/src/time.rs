//! Time sources for the frame loop

use std::time::Duration;

/// Supplies frame timestamps and waits between frames
pub trait TimeSource {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> f64;

    /// Block (or pretend to) until the next frame is due
    fn wait(&mut self, interval: Duration);
}

/// Deterministic time that only advances when waited on
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now_ms: f64,
}

impl ManualTime {
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn wait(&mut self, interval: Duration) {
        self.now_ms += interval.as_secs_f64() * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_time_advances_on_wait() {
        let mut time = ManualTime::starting_at(100.0);
        time.wait(Duration::from_millis(16));
        assert!((time.now_ms() - 116.0).abs() < 1e-9);
        time.advance(4.0);
        assert!((time.now_ms() - 120.0).abs() < 1e-9);
    }
}
