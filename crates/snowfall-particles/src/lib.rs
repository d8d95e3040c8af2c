//! Snowfall Particles - Snow and text-morph particle simulation
//!
//! Provides the fixed-size particle simulation behind the effect:
//! - `ParticleStore`: the particle population and its morph targets
//! - `SimulationState`: opacity envelope, frame clock and the per-frame
//!   update/draw step
//! - `CircleInstance`: packed draw records handed to a `Surface`
//! - `ParticleRng`: small seeded PRNG shared by spawning, wrapping and sampling

pub mod engine;
pub mod instance;
pub mod particle;
pub mod rand;
pub mod store;
pub mod surface;

pub use engine::SimulationState;
pub use instance::CircleInstance;
pub use particle::{Behavior, Drift, Oscillation, Particle};
pub use rand::ParticleRng;
pub use store::ParticleStore;
pub use surface::Surface;
