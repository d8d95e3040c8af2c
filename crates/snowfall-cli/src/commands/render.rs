//! Headless effect-to-PNG render command

use super::{load_config, make_raster, RasterKind};
use anyhow::{Context, Result};
use snowfall_core::Viewport;
use snowfall_effect::EffectController;
use snowfall_particles::instance::as_bytes;
use snowfall_particles::{CircleInstance, ParticleRng};
use snowfall_render::Canvas;
use snowfall_runtime::{FrameLoop, ManualTime, StopReason};
use std::path::{Path, PathBuf};

pub struct RenderArgs {
    pub output_dir: String,
    pub width: u32,
    pub height: u32,
    pub dpr: f32,
    pub fps: f64,
    pub frames: u64,
    pub every: u64,
    pub name: Option<String>,
    pub name_at: u64,
    pub deactivate_at: Option<u64>,
    pub config: Option<String>,
    pub raster: RasterKind,
    pub seed: Option<u32>,
    pub background: Option<[u8; 3]>,
    pub instances: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {}", args.fps);
    }
    let every = args.every.max(1);
    let config = load_config(args.config.as_deref())?;
    let raster = make_raster(args.raster, &config);

    let output_dir = PathBuf::from(&args.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create '{}'", output_dir.display()))?;

    let viewport = Viewport::new(args.width as f32, args.height as f32, args.dpr);
    let rng = args
        .seed
        .map(ParticleRng::new)
        .unwrap_or_else(ParticleRng::from_time);

    let mut controller =
        EffectController::mount(config, raster, Some(Canvas::new(1, 1)), viewport, rng);
    controller.activate();

    let dims = controller.state().dimensions();
    println!(
        "Rendering {}x{} @{}x, up to {} frame(s)",
        dims.width, dims.height, dims.device_pixel_ratio, args.frames
    );

    let mut written = 0usize;
    let mut failure = None;
    let mut time = ManualTime::default();
    let stats = FrameLoop::with_rate(args.fps)
        .with_max_frames(args.frames)
        .run(&mut controller, &mut time, |controller, frame, _outcome| {
            if failure.is_some() {
                return;
            }
            if frame % every == 0 {
                let path = frame_path(&output_dir, frame, "png");
                if let Some(canvas) = controller.surface() {
                    match canvas.save_png(&path, args.background) {
                        Ok(()) => written += 1,
                        Err(e) => failure = Some(anyhow::Error::new(e)),
                    }
                }
                if args.instances {
                    let path = frame_path(&output_dir, frame, "bin");
                    if let Err(e) = write_instances(&path, controller.state().instances()) {
                        failure = Some(e);
                    }
                }
            }
            if frame == args.name_at && args.name.is_some() {
                controller.set_greeting_name(args.name.as_deref());
                if let Some(text) = controller.morph_text() {
                    println!("Frame {}: morphing into \"{}\"", frame, text);
                }
            }
            if Some(frame) == args.deactivate_at {
                println!("Frame {}: snow off", frame);
                controller.deactivate();
            }
        });

    if let Some(e) = failure {
        return Err(e).context("Failed to write frame");
    }

    let reason = match stats.stopped {
        StopReason::Idle => "faded out",
        StopReason::FrameLimit => "frame limit reached",
    };
    println!(
        "Simulated {} frame(s) ({}), wrote {} image(s) to {}",
        stats.frames,
        reason,
        written,
        output_dir.display()
    );
    if stats.skipped > 0 {
        log::warn!("{} frame(s) skipped", stats.skipped);
    }
    Ok(())
}

fn frame_path(dir: &Path, frame: u64, extension: &str) -> PathBuf {
    dir.join(format!("frame_{:05}.{}", frame, extension))
}

/// Write a frame's draw list as packed native-endian `CircleInstance`
/// records (x, y, radius, alpha as f32), ready for instanced drawing.
fn write_instances(path: &Path, instances: &[CircleInstance]) -> Result<()> {
    std::fs::write(path, as_bytes(instances))
        .with_context(|| format!("Failed to write draw list to '{}'", path.display()))
}
