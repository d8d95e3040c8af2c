//! Packed per-particle draw records

use bytemuck::{Pod, Zeroable};

/// One filled circle, in device pixels. Matches a `vec4` instance attribute
/// so the slice can be uploaded to a GPU buffer as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// Per-particle alpha before the global fade is applied
    pub alpha: f32,
}

impl CircleInstance {
    pub fn new(x: f32, y: f32, radius: f32, alpha: f32) -> Self {
        Self {
            center: [x, y],
            radius,
            alpha,
        }
    }
}

/// View a draw list as raw bytes for buffer upload
pub fn as_bytes(instances: &[CircleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
