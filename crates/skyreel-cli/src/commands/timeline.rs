//! `skyreel timeline`: print the composition manifest as JSON.

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;
use skyreel_composition::{
    promo_audio, promo_timeline, AudioTrack, SceneSpan, Transition, VideoConfig,
};

/// Everything a rendering host needs to schedule the composition.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub duration_in_frames: u32,
    pub scenes: Vec<SceneSpan>,
    pub transitions: Vec<Transition>,
    pub audio: AudioTrack,
}

pub fn manifest() -> Manifest {
    let config = VideoConfig::default();
    let timeline = promo_timeline();
    Manifest {
        fps: config.fps,
        width: config.width,
        height: config.height,
        duration_in_frames: timeline.duration_in_frames(),
        scenes: timeline.scene_spans(),
        transitions: timeline.transitions().to_vec(),
        audio: promo_audio(),
    }
}

pub fn run(pretty: bool) -> Result<ExitCode> {
    let manifest = manifest();
    let json = if pretty {
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string(&manifest)?
    };
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}
