//! Scene 1: logo disc and title card.

use crate::anim::{interpolate, spring, SpringConfig};
use crate::layer::{Layer, Rect};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::BLUESKY_BLUE;
use crate::color::Color;

/// Blue full-bleed intro: the logo disc springs in, then the title and
/// tagline fade in together.
#[derive(Debug)]
pub struct Intro;

const LOGO_SIZE: f64 = 200.0;

impl Scene for Intro {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn duration_in_frames(&self) -> u32 {
        120
    }

    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::fill(BLUESKY_BLUE));

        let cx = config.center_x();
        let cy = config.center_y();

        let logo_scale = spring(frame as f64, config.fps as f64, SpringConfig::with_damping(200.0));
        let logo = Rect::new(cx - LOGO_SIZE / 2.0, cy - 240.0, LOGO_SIZE, LOGO_SIZE);
        let (px, py) = logo.center();
        out.push(
            Layer::circle(logo, Color::white())
                .with_transform(crate::layer::Transform::scale_about(logo_scale, px, py)),
        );
        out.push(
            Layer::text_centered("BSKY", cx, cy - 170.0, 60.0, BLUESKY_BLUE)
                .with_transform(crate::layer::Transform::scale_about(logo_scale, px, py)),
        );

        let title_opacity = interpolate(frame as f64, &[20.0, 40.0], &[0.0, 1.0]);
        out.push(
            Layer::text_centered("Bluesky", cx, cy + 20.0, 60.0, Color::white())
                .with_opacity(title_opacity),
        );
        out.push(
            Layer::text_centered("A New Social Network", cx, cy + 110.0, 24.0, Color::white())
                .with_opacity(title_opacity),
        );

        out
    }
}
