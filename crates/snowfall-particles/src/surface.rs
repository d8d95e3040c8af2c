//! Drawing surface abstraction

use crate::instance::CircleInstance;

/// A 2D output surface sized in device pixels that can draw
/// alpha-blended filled circles.
pub trait Surface {
    /// Current size in device pixels
    fn size(&self) -> (u32, u32);

    /// Resize the backing store; contents may be discarded
    fn resize(&mut self, width: u32, height: u32);

    /// Erase everything to fully transparent
    fn clear(&mut self);

    /// Draw each circle at its own alpha multiplied by `global_alpha`
    fn fill_circles(&mut self, circles: &[CircleInstance], global_alpha: f32);
}
