//! Particle types: ambient drift parameters, morph targets and per-frame behavior

use crate::rand::ParticleRng;
use snowfall_core::{Point2, SnowConfig};
use std::f32::consts::TAU;

/// Sinusoidal sway parameters, evaluated against wall-clock time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub freq_x: f32,
    pub freq_y: f32,
    pub phase_x: f32,
    pub phase_y: f32,
}

/// Intrinsic ambient motion of a flake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Base velocity; `y` is always positive (downwards)
    pub velocity: Point2,
    pub oscillation: Oscillation,
}

/// One simulated snowflake / text pixel
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Normalized position, may sit slightly outside [0, 1] near the margins
    pub position: Point2,
    pub drift: Drift,
    /// Current radius; replaced while the particle is part of the text
    pub size: f32,
    /// Ambient radius restored when morphing ends
    pub base_size: f32,
    /// Morph target in normalized coordinates
    pub target: Option<Point2>,
}

/// How a particle moves this frame, resolved once per particle per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Ambient(Drift),
    Seeking(Point2),
}

impl Particle {
    /// Spawn a flake with randomized ambient attributes. With `from_top`
    /// the flake starts above the viewport so it falls into view.
    pub fn spawn(rng: &mut ParticleRng, config: &SnowConfig, from_top: bool) -> Self {
        let size = config.size_min + rng.next_f32() * config.size_range;
        let x = rng.next_f32();
        let y = if from_top {
            -rng.next_f32() * config.top_spawn_depth
        } else {
            rng.next_f32()
        };
        let velocity = Point2::new(
            (rng.next_f32() - 0.5) * config.drift_x,
            rng.range(config.speed_min, config.speed_max) / config.speed_divisor,
        );
        let oscillation = Oscillation {
            freq_x: config.freq_min + rng.next_f32() * config.freq_range,
            freq_y: config.freq_min + rng.next_f32() * config.freq_range,
            phase_x: rng.next_f32() * TAU,
            phase_y: rng.next_f32() * TAU,
        };

        Self {
            position: Point2::new(x, y),
            drift: Drift {
                velocity,
                oscillation,
            },
            size,
            base_size: size,
            target: None,
        }
    }

    /// Seeking only when a target is set and the store is morphing
    pub fn behavior(&self, morphing: bool) -> Behavior {
        match self.target {
            Some(target) if morphing => Behavior::Seeking(target),
            _ => Behavior::Ambient(self.drift),
        }
    }

    /// Drop the morph target and restore the ambient look
    pub fn release(&mut self) {
        self.target = None;
        self.size = self.base_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_respects_config_ranges() {
        let config = SnowConfig::default();
        let mut rng = ParticleRng::new(42);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, &config, false);
            assert!(p.size >= 0.4 && p.size <= 2.0);
            assert_eq!(p.size, p.base_size);
            assert!((0.0..1.0).contains(&p.position.x));
            assert!((0.0..1.0).contains(&p.position.y));
            assert!(p.drift.velocity.y > 0.0);
            assert!(p.drift.velocity.x.abs() <= 0.05);
            assert!(p.drift.oscillation.phase_x < TAU);
            assert!(p.target.is_none());
        }
    }

    #[test]
    fn spawn_from_top_starts_above_viewport() {
        let config = SnowConfig::default();
        let mut rng = ParticleRng::new(3);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, &config, true);
            assert!(p.position.y <= 0.0 && p.position.y > -0.8);
        }
    }

    #[test]
    fn behavior_requires_target_and_morphing() {
        let mut rng = ParticleRng::new(8);
        let mut p = Particle::spawn(&mut rng, &SnowConfig::default(), false);
        assert!(matches!(p.behavior(true), Behavior::Ambient(_)));

        let target = Point2::new(0.3, 0.7);
        p.target = Some(target);
        assert_eq!(p.behavior(true), Behavior::Seeking(target));
        assert!(matches!(p.behavior(false), Behavior::Ambient(_)));
    }

    #[test]
    fn release_restores_base_size() {
        let mut rng = ParticleRng::new(8);
        let mut p = Particle::spawn(&mut rng, &SnowConfig::default(), false);
        p.target = Some(Point2::new(0.5, 0.5));
        p.size = 9.0;
        p.release();
        assert!(p.target.is_none());
        assert_eq!(p.size, p.base_size);
    }
}
