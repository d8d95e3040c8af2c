//! Snowfall Runtime - Animation frame infrastructure
//!
//! Provides the building blocks for driving the effect at display cadence:
//! - `FrameClock`: frame-rate independent elapsed-time factor
//! - `TimeSource`: frame timestamps, e.g. manually stepped time for headless runs
//! - `FrameDriven` / `FrameOutcome`: the single-frame contract
//! - `FrameLoop`: periodic driver that stops once a frame reports idle

mod clock;
mod frame;
mod frame_loop;
mod time;

pub use clock::FrameClock;
pub use frame::{FrameDriven, FrameOutcome};
pub use frame_loop::{FrameLoop, LoopStats, StopReason};
pub use time::{ManualTime, TimeSource};
