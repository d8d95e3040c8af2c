//! Glyph sampling report command

use super::{load_config, make_raster, RasterKind};
use anyhow::{Context, Result};
use snowfall_core::{Dimensions, Viewport};
use snowfall_glyph::{split_lines, stride_for, GlyphSampler, TextLayout};

/// Width of the ASCII preview in characters
const PREVIEW_COLUMNS: usize = 100;

pub struct SampleArgs {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub dpr: f32,
    pub config: Option<String>,
    pub raster: RasterKind,
    pub preview: bool,
}

pub fn run(args: SampleArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let particle_count = config.snow.particle_count;
    let raster = make_raster(args.raster, &config);
    let mut sampler = GlyphSampler::new(raster, config.glyph.clone());

    let dims = Viewport::new(args.width as f32, args.height as f32, args.dpr).dimensions();
    let layout = TextLayout::compute(&args.text, dims, &config.glyph);
    let cells = sampler
        .sample_cells(&args.text, dims)
        .context("Failed to rasterize text")?;

    println!("Lines:");
    for line in split_lines(&args.text, &config.glyph) {
        println!("  {}", line);
    }
    println!("Canvas: {}x{} device pixels", dims.width, dims.height);
    println!("Font size: {:.1}px", layout.font_size);
    println!(
        "Stride: {}px",
        stride_for(dims.device_pixel_ratio, config.glyph.stride_factor)
    );
    println!("Sampled points: {}", cells.len());
    println!(
        "Particles in text: {} of {}",
        cells.len().min(particle_count),
        particle_count
    );
    if cells.len() < particle_count {
        println!("  (text too small to use every particle; the rest keep snowing)");
    }

    if args.preview {
        for row in preview(&cells, dims, PREVIEW_COLUMNS) {
            println!("{}", row);
        }
    }
    Ok(())
}

/// Downsample sampled cells into rows of `#` and `.`
fn preview(cells: &[(u32, u32)], dims: Dimensions, columns: usize) -> Vec<String> {
    if dims.is_empty() || columns == 0 {
        return Vec::new();
    }
    // Terminal cells are roughly twice as tall as wide
    let cell_w = dims.width as f32 / columns as f32;
    let rows = ((dims.height as f32 / (cell_w * 2.0)).ceil() as usize).max(1);
    let mut grid = vec![vec![false; columns]; rows];
    for &(x, y) in cells {
        let col = ((x as f32 / cell_w) as usize).min(columns - 1);
        let row = ((y as f32 / (cell_w * 2.0)) as usize).min(rows - 1);
        grid[row][col] = true;
    }
    grid.into_iter()
        .map(|row| row.into_iter().map(|on| if on { '#' } else { '.' }).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_marks_sampled_cells() {
        let dims = Dimensions::new(100, 40, 1.0);
        let rows = preview(&[(0, 0), (99, 39)], dims, 10);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 10));
        assert!(rows[0].starts_with('#'));
        assert!(rows[1].ends_with('#'));
        assert_eq!(rows.iter().map(|r| r.matches('#').count()).sum::<usize>(), 2);
    }

    #[test]
    fn preview_of_empty_surface() {
        assert!(preview(&[], Dimensions::new(0, 10, 1.0), 10).is_empty());
    }
}
