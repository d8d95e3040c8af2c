//! Snowfall Render - Software rendering of the particle draw list
//!
//! `Canvas` is an RGBA surface with anti-aliased, alpha-blended circles. It
//! implements the particle crate's `Surface` trait and can write frames to
//! PNG, optionally flattened over a background colour.

mod canvas;

pub use canvas::Canvas;
