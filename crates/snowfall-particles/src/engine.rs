//! Motion engine: opacity envelope plus the per-frame update/draw step

use crate::instance::CircleInstance;
use crate::particle::Behavior;
use crate::rand::ParticleRng;
use crate::store::ParticleStore;
use crate::surface::Surface;
use snowfall_core::{Dimensions, EffectConfig, FadeConfig, MorphConfig, Point2, SnowConfig};
use snowfall_runtime::{FrameClock, FrameOutcome};

/// Horizontal margin past which a flake re-enters on the other side
const WRAP_MARGIN_X: f32 = 0.1;
/// Distance a horizontally wrapping flake is moved
const WRAP_SPAN_X: f32 = 1.2;
/// Flakes below this re-enter from the top
const WRAP_BOTTOM: f32 = 1.1;
/// Re-entry height for flakes that fell out of the bottom
const RESPAWN_Y: f32 = -0.05;

/// The single simulation instance behind one mounted effect.
///
/// Created when the effect mounts and dropped when it unmounts. All mutation
/// happens either inside [`SimulationState::render_frame`] or through the
/// controller entry points, never concurrently.
pub struct SimulationState {
    store: ParticleStore,
    is_running: bool,
    target_opacity: f32,
    current_opacity: f32,
    clock: FrameClock,
    dims: Dimensions,
    rng: ParticleRng,
    snow: SnowConfig,
    morph: MorphConfig,
    fade: FadeConfig,
    /// Reused draw list, rebuilt every frame
    instances: Vec<CircleInstance>,
}

impl SimulationState {
    /// Create the state with a uniformly distributed ambient population
    pub fn new(config: &EffectConfig, dims: Dimensions, mut rng: ParticleRng) -> Self {
        let mut store = ParticleStore::new();
        store.initialize(config.snow.particle_count, false, &config.snow, &mut rng);
        Self {
            store,
            is_running: false,
            target_opacity: 0.0,
            current_opacity: 0.0,
            clock: FrameClock::new(&config.clock),
            dims,
            rng,
            snow: config.snow.clone(),
            morph: config.morph.clone(),
            fade: config.fade.clone(),
            instances: Vec::with_capacity(config.snow.particle_count),
        }
    }

    /// Regenerate every particle, optionally starting above the viewport
    pub fn reinitialize(&mut self, from_top: bool) {
        let count = self.snow.particle_count;
        self.store
            .initialize(count, from_top, &self.snow, &mut self.rng);
    }

    /// Point the first `points.len()` particles at text coordinates
    pub fn assign_targets(&mut self, points: &[Point2]) {
        self.store.assign_targets(
            points,
            &self.morph,
            self.dims.device_pixel_ratio,
            &mut self.rng,
        );
    }

    pub fn clear_targets(&mut self) {
        self.store.clear_targets();
    }

    pub fn set_morphing(&mut self, morphing: bool) {
        self.store.set_morphing(morphing);
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn rng_mut(&mut self) -> &mut ParticleRng {
        &mut self.rng
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Replace all dimension fields at once
    pub fn set_dimensions(&mut self, dims: Dimensions) {
        self.dims = dims;
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    pub fn target_opacity(&self) -> f32 {
        self.target_opacity
    }

    pub fn set_target_opacity(&mut self, opacity: f32) {
        self.target_opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn current_opacity(&self) -> f32 {
        self.current_opacity
    }

    /// Next frame counts as exactly one baseline frame
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Draw list produced by the last frame
    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    /// Something is visible or about to fade in
    pub fn needs_render(&self) -> bool {
        self.current_opacity > self.fade.idle_threshold || self.target_opacity > 0.0
    }

    /// Exponentially smooth the current opacity towards the target
    pub fn update_opacity(&mut self) {
        let next = self.current_opacity
            + (self.target_opacity - self.current_opacity) * self.fade.speed;
        self.current_opacity = next.clamp(0.0, 1.0);
    }

    /// Move every particle by one frame (`dt` baseline frames) and rebuild
    /// the draw list.
    pub fn advance(&mut self, now_ms: f64, dt: f32) {
        let Self {
            store,
            rng,
            instances,
            dims,
            snow,
            morph,
            ..
        } = self;

        let w = dims.width as f32;
        let h = dims.height as f32;
        let dpr = dims.device_pixel_ratio;
        let sway_amplitude = w / snow.sway_divisor;
        let seconds = now_ms / 1000.0;
        let morph_step = (morph.speed * dt).min(1.0);
        let morphing = store.is_morphing();

        instances.clear();
        for p in store.particles_mut() {
            match p.behavior(morphing) {
                Behavior::Seeking(target) => {
                    p.position = p.position.approach(&target, morph_step);
                    instances.push(CircleInstance::new(
                        p.position.x * w,
                        p.position.y * h,
                        p.size,
                        morph.text_opacity,
                    ));
                }
                Behavior::Ambient(drift) => {
                    // Smaller flakes cover more of the screen per frame
                    let step = Point2::new(
                        2.0 * drift.velocity.x / p.size / w,
                        2.0 * drift.velocity.y / p.size / h,
                    );
                    p.position = wrap_position(p.position + step * dt, rng);

                    let osc = drift.oscillation;
                    let phase = f64::from(osc.freq_x) * seconds + f64::from(osc.phase_x);
                    let sway = sway_amplitude * phase.sin() as f32;
                    instances.push(CircleInstance::new(
                        p.position.x * w + sway,
                        p.position.y * h,
                        p.size * dpr,
                        snow.opacity,
                    ));
                }
            }
        }
    }

    /// Run one animation frame against `surface`.
    ///
    /// Order within a frame: idle check, opacity update, particle update and
    /// draw, then the scheduling decision using the just-updated opacity.
    /// A missing surface skips the frame without touching any state.
    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: Option<&mut S>,
    ) -> FrameOutcome {
        if !self.needs_render() {
            self.is_running = false;
            if let Some(surface) = surface {
                surface.clear();
            }
            return FrameOutcome::Idle;
        }

        let Some(surface) = surface else {
            log::trace!("[particles] no surface, frame skipped");
            return FrameOutcome::Skipped;
        };
        if self.dims.is_empty() {
            log::trace!("[particles] zero-sized surface, frame skipped");
            return FrameOutcome::Skipped;
        }

        self.update_opacity();
        let dt = self.clock.tick(now_ms);

        surface.clear();
        self.advance(now_ms, dt);
        surface.fill_circles(&self.instances, self.current_opacity);

        if self.needs_render() {
            FrameOutcome::Continue
        } else {
            self.is_running = false;
            surface.clear();
            log::debug!("[particles] faded out, animation stopped");
            FrameOutcome::Idle
        }
    }
}

/// Apply the viewport wrap-around rules to a normalized position
pub fn wrap_position(mut pos: Point2, rng: &mut ParticleRng) -> Point2 {
    if pos.x < -WRAP_MARGIN_X {
        pos.x += WRAP_SPAN_X;
    }
    if pos.x > 1.0 + WRAP_MARGIN_X {
        pos.x -= WRAP_SPAN_X;
    }
    if pos.y > WRAP_BOTTOM {
        pos.y = RESPAWN_Y;
        pos.x = rng.next_f32();
    }
    pos
}
