//! Periodic frame driver

use crate::frame::{FrameDriven, FrameOutcome};
use crate::time::TimeSource;
use std::time::Duration;

/// Why a [`FrameLoop`] run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The driven target reported [`FrameOutcome::Idle`]
    Idle,
    /// The frame budget ran out first
    FrameLimit,
}

/// Summary of one [`FrameLoop::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub skipped: u64,
    pub stopped: StopReason,
}

/// Invokes a [`FrameDriven`] target at a fixed cadence until it goes idle.
///
/// Every frame runs to completion before the next is requested, so the
/// target never sees overlapping calls.
pub struct FrameLoop {
    pub interval: Duration,
    pub max_frames: Option<u64>,
}

impl FrameLoop {
    /// Loop at `hz` frames per second with no frame budget
    pub fn with_rate(hz: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / hz),
            max_frames: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Drive `target` until it reports idle or the frame budget is spent.
    /// `on_frame` observes every completed frame, e.g. to capture output.
    pub fn run<T, S, F>(&self, target: &mut T, time: &mut S, mut on_frame: F) -> LoopStats
    where
        T: FrameDriven,
        S: TimeSource,
        F: FnMut(&mut T, u64, FrameOutcome),
    {
        let mut frames = 0u64;
        let mut skipped = 0u64;

        loop {
            if self.max_frames.is_some_and(|max| frames >= max) {
                log::debug!("[runtime] frame budget of {frames} reached");
                return LoopStats {
                    frames,
                    skipped,
                    stopped: StopReason::FrameLimit,
                };
            }

            let outcome = target.frame(time.now_ms());
            frames += 1;
            if outcome == FrameOutcome::Skipped {
                skipped += 1;
            }
            on_frame(target, frames, outcome);

            if !outcome.wants_next_frame() {
                log::debug!("[runtime] target idle after {frames} frame(s)");
                return LoopStats {
                    frames,
                    skipped,
                    stopped: StopReason::Idle,
                };
            }
            time.wait(self.interval);
        }
    }
}
