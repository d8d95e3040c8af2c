//! Fixed-size particle population with per-particle morph targets

use crate::particle::{Behavior, Particle};
use crate::rand::ParticleRng;
use snowfall_core::{MorphConfig, Point2, SnowConfig};

/// Owns every particle for the lifetime of the effect.
///
/// The population is only ever replaced wholesale by [`ParticleStore::initialize`];
/// individual particles are never added or removed, only retargeted.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    morphing: bool,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate the whole population with fresh ambient attributes
    pub fn initialize(
        &mut self,
        count: usize,
        from_top: bool,
        config: &SnowConfig,
        rng: &mut ParticleRng,
    ) {
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, config, from_top))
            .collect();
        log::debug!("[particles] spawned {count} flakes (from_top: {from_top})");
    }

    /// Hand `points[i]` to particle `i`. Particles beyond the available points
    /// stay ambient. Switches the store into morphing mode.
    pub fn assign_targets(
        &mut self,
        points: &[Point2],
        config: &MorphConfig,
        device_pixel_ratio: f32,
        rng: &mut ParticleRng,
    ) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            match points.get(i) {
                Some(&point) => {
                    p.target = Some(point);
                    p.size = (config.size_min + rng.next_f32() * config.size_range)
                        * device_pixel_ratio;
                }
                None => p.release(),
            }
        }
        self.morphing = true;
        log::debug!(
            "[particles] {} of {} particles assigned to text",
            points.len().min(self.particles.len()),
            self.particles.len()
        );
    }

    /// Release every target and leave morphing mode
    pub fn clear_targets(&mut self) {
        for p in &mut self.particles {
            p.release();
        }
        self.morphing = false;
    }

    /// Gate seeking without touching the per-particle targets
    pub fn set_morphing(&mut self, morphing: bool) {
        self.morphing = morphing;
    }

    pub fn is_morphing(&self) -> bool {
        self.morphing
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of particles currently seeking a target
    pub fn seeking_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| matches!(p.behavior(self.morphing), Behavior::Seeking(_)))
            .count()
    }
}
