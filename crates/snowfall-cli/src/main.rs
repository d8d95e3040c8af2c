//! Snowfall CLI - Headless driver for the snowfall greeting effect

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{render, sample, RasterKind};

#[derive(Parser)]
#[command(name = "snowfall")]
#[command(about = "Snowfall overlay that morphs into a greeting", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the effect and write frames as PNG images
    Render {
        /// Directory for the numbered frame images
        #[arg(short, long, default_value = "frames")]
        output_dir: String,

        /// Viewport width in logical pixels
        #[arg(long, default_value = "960")]
        width: u32,

        /// Viewport height in logical pixels
        #[arg(long, default_value = "540")]
        height: u32,

        /// Device pixel ratio
        #[arg(long, default_value = "1.0")]
        dpr: f32,

        /// Simulated display refresh rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Maximum number of frames to simulate
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Write every Nth frame
        #[arg(long, default_value = "10")]
        every: u64,

        /// Greeting name to morph into
        #[arg(long)]
        name: Option<String>,

        /// Frame at which the greeting name is entered
        #[arg(long, default_value = "60")]
        name_at: u64,

        /// Frame at which the snow is switched off
        #[arg(long)]
        deactivate_at: Option<u64>,

        /// Path to an effect config TOML file
        #[arg(long)]
        config: Option<String>,

        /// Text rasterizer
        #[arg(long, value_enum, default_value = "cosmic")]
        raster: RasterKind,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u32>,

        /// Background colour as hex (e.g. 02040a); transparent if omitted
        #[arg(long, value_parser = parse_hex_color)]
        background: Option<[u8; 3]>,

        /// Also write each saved frame's draw list as packed f32 records
        #[arg(long)]
        instances: bool,
    },

    /// Report how a text samples into particle targets
    Sample {
        /// Text to sample
        text: String,

        /// Viewport width in logical pixels
        #[arg(long, default_value = "960")]
        width: u32,

        /// Viewport height in logical pixels
        #[arg(long, default_value = "540")]
        height: u32,

        /// Device pixel ratio
        #[arg(long, default_value = "1.0")]
        dpr: f32,

        /// Path to an effect config TOML file
        #[arg(long)]
        config: Option<String>,

        /// Text rasterizer
        #[arg(long, value_enum, default_value = "cosmic")]
        raster: RasterKind,

        /// Print an ASCII preview of the sampled cells
        #[arg(long)]
        preview: bool,
    },
}

fn parse_hex_color(s: &str) -> Result<[u8; 3], String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected 6 hex digits, got '{}'", s));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid colour: {}", e))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Render {
            output_dir,
            width,
            height,
            dpr,
            fps,
            frames,
            every,
            name,
            name_at,
            deactivate_at,
            config,
            raster,
            seed,
            background,
            instances,
        } => render::run(render::RenderArgs {
            output_dir,
            width,
            height,
            dpr,
            fps,
            frames,
            every,
            name,
            name_at,
            deactivate_at,
            config,
            raster,
            seed,
            background,
            instances,
        }),
        Commands::Sample {
            text,
            width,
            height,
            dpr,
            config,
            raster,
            preview,
        } => sample::run(sample::SampleArgs {
            text,
            width,
            height,
            dpr,
            config,
            raster,
            preview,
        }),
    }
}
