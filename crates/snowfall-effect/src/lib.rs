//! Snowfall Effect - Orchestrates the snow overlay and greeting morph
//!
//! `EffectController` owns the simulation for one mounted effect and exposes
//! the entry points the surrounding UI calls: activation, greeting text and
//! resize notifications. It also implements `FrameDriven`, so any periodic
//! scheduler can drive it one animation frame at a time.

mod controller;

pub use controller::EffectController;
