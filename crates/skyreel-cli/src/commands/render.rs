//! `skyreel render`: rasterize the composition to disk.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use skyreel_composition::{promo_timeline, VideoConfig};
use skyreel_render::gif::{export_gif, GifOptions};
use skyreel_render::{png, Renderer};

pub fn run(
    out_dir: &Path,
    gif: bool,
    frame: Option<u32>,
    every: Option<u32>,
    scale: Option<u32>,
) -> Result<ExitCode> {
    let timeline = promo_timeline();
    let renderer = Renderer::new(VideoConfig::default());

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    if gif {
        let defaults = GifOptions::default();
        let options = GifOptions {
            every: every.unwrap_or(defaults.every),
            scale: scale.unwrap_or(defaults.scale),
        };
        let path = out_dir.join("promo.gif");
        export_gif(&renderer, &timeline, &path, options)?;
        println!("GIF written to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(frame) = frame {
        let buffer = renderer.render_frame(&timeline, frame)?;
        let path = out_dir.join(format!("frame-{frame:04}.png"));
        png::write_frame(&buffer, &path)?;
        println!("frame written to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let step = every.unwrap_or(1).max(1);
    let total = timeline.duration_in_frames();
    let mut written = 0u32;
    let mut index = 0;
    while index < total {
        let buffer = renderer.render_frame(&timeline, index)?;
        png::write_frame(&buffer, &out_dir.join(format!("frame-{index:04}.png")))?;
        written += 1;
        index += step;
    }
    println!("{written} frames written to {}", out_dir.display());
    Ok(ExitCode::SUCCESS)
}
