//! Single-frame contract between the frame driver and the simulation

/// What a frame callback wants the driver to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame rendered, schedule another
    Continue,
    /// Frame could not be drawn this time; try again next frame
    Skipped,
    /// Fully faded out and inactive, stop scheduling
    Idle,
}

impl FrameOutcome {
    pub fn wants_next_frame(self) -> bool {
        !matches!(self, FrameOutcome::Idle)
    }
}

/// Something that can be advanced and drawn one animation frame at a time
pub trait FrameDriven {
    /// Advance and draw one frame at timestamp `now_ms`
    fn frame(&mut self, now_ms: f64) -> FrameOutcome;
}
