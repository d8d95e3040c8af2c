//! Effect lifecycle: activation, greeting text, resize and frame dispatch

use snowfall_core::{EffectConfig, Viewport};
use snowfall_glyph::{GlyphRaster, GlyphSampler};
use snowfall_particles::{ParticleRng, SimulationState, Surface};
use snowfall_runtime::{FrameDriven, FrameOutcome};

/// Owns one mounted effect: its simulation, glyph sampler and output surface.
///
/// All entry points and [`EffectController::render_frame`] take `&mut self`,
/// so mutation is confined to whichever thread owns the controller. Hosts
/// that receive UI events on another thread wrap it in a `Mutex`.
pub struct EffectController<R, S> {
    config: EffectConfig,
    state: SimulationState,
    sampler: GlyphSampler<R>,
    surface: Option<S>,
    viewport: Viewport,
    morph_text: Option<String>,
    active: bool,
}

impl<R: GlyphRaster, S: Surface> EffectController<R, S> {
    /// Mount the effect with an ambient population spread over the viewport.
    /// Nothing is drawn until [`EffectController::activate`].
    pub fn mount(
        config: EffectConfig,
        raster: R,
        surface: Option<S>,
        viewport: Viewport,
        rng: ParticleRng,
    ) -> Self {
        let state = SimulationState::new(&config, viewport.dimensions(), rng);
        let sampler = GlyphSampler::new(raster, config.glyph.clone());
        let mut controller = Self {
            config,
            state,
            sampler,
            surface,
            viewport,
            morph_text: None,
            active: false,
        };
        controller.handle_resize(viewport);
        log::debug!(
            "[effect] mounted with {} particles",
            controller.state.store().len()
        );
        controller
    }

    /// Tear the effect down, handing the surface back to the host
    pub fn unmount(self) -> Option<S> {
        log::debug!("[effect] unmounted");
        self.surface
    }

    /// Start (or resume) the snowfall and fade it in
    pub fn activate(&mut self) {
        if !self.state.is_running() {
            self.state.reinitialize(true);
            self.state.set_running(true);
            log::info!("[effect] snow activated");
        }
        self.active = true;
        self.state.set_target_opacity(1.0);
        self.state.reset_clock();

        if let Some(text) = self.morph_text.clone() {
            self.resample(&text);
        }
    }

    /// Fade out. Particles keep falling until the fade completes, after which
    /// frames report idle. The greeting is dropped with the snow.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.state.set_target_opacity(0.0);
        self.morph_text = None;
        self.state.clear_targets();
        log::info!("[effect] snow deactivated");
    }

    /// Toggle entry point for the UI switch
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Show `text` as particles, or return to plain snow with `None`.
    /// Text set while inactive is kept and shown on the next activation.
    pub fn set_morph_text(&mut self, text: Option<&str>) {
        self.morph_text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        match self.morph_text.clone() {
            Some(text) if self.active => self.resample(&text),
            _ => self.state.clear_targets(),
        }
    }

    /// Derive the morph text from a greeting name
    pub fn set_greeting_name(&mut self, name: Option<&str>) {
        let text = name.and_then(|n| self.config.greeting_for(n));
        self.set_morph_text(text.as_deref());
    }

    /// Apply new viewport dimensions. Text targets depend on the surface
    /// size, so a shown greeting is sampled again.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let dims = viewport.dimensions();
        self.state.set_dimensions(dims);
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(dims.width, dims.height);
        }
        log::debug!(
            "[effect] surface {}x{} @{}x",
            dims.width,
            dims.height,
            dims.device_pixel_ratio
        );

        if self.active {
            if let Some(text) = self.morph_text.clone() {
                self.resample(&text);
            }
        }
    }

    /// Run one animation frame
    pub fn render_frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.state.render_frame(now_ms, self.surface.as_mut())
    }

    /// Provide (or replace) the drawing surface, sized to the viewport
    pub fn attach_surface(&mut self, mut surface: S) {
        let dims = self.state.dimensions();
        surface.resize(dims.width, dims.height);
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the host should keep scheduling frames
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn morph_text(&self) -> Option<&str> {
        self.morph_text.as_deref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn raster(&self) -> &R {
        self.sampler.raster()
    }

    fn resample(&mut self, text: &str) {
        let dims = self.state.dimensions();
        match self.sampler.sample(text, dims, self.state.rng_mut()) {
            Ok(points) => self.state.assign_targets(&points),
            Err(e) => log::warn!("[effect] cannot sample {text:?}: {e}"),
        }
    }
}

impl<R: GlyphRaster, S: Surface> FrameDriven for EffectController<R, S> {
    fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.render_frame(now_ms)
    }
}
