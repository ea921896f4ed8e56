//! Lumen command line renderer.
//!
//! Loads a scene (or builds a preset), renders it once and writes the
//! packed RGBA buffer to a PNG.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use lumen_renderer::{render_image, Camera, Scene};

use crate::cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let desc = args.scene_desc()?;
    log::info!(
        "Rendering {}x{}: {} shapes, {} lights, depth {}",
        desc.width,
        desc.height,
        desc.shapes.len(),
        desc.lights.len(),
        desc.max_depth
    );

    let camera = Camera::from_desc(&desc);
    let scene = Scene::from_desc(&desc);
    let (image, _stats) = render_image(&camera, &scene).context("Render failed")?;

    image::save_buffer(
        &args.output,
        image.to_rgba_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Saved {}", args.output.display());
    Ok(())
}
