//! Scene 2: bullet-point explainer.

use crate::anim::interpolate;
use crate::layer::{Layer, Rect};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::{BLUESKY_BLUE, FEED_BG, INK};

/// Heading plus four bullet lines, each fading in 20 frames after the
/// previous one.
#[derive(Debug)]
pub struct WhatIsBluesky;

const ITEMS: [(&str, f64); 4] = [
    ("Decentralized social media platform", 0.0),
    ("Built on the AT Protocol", 20.0),
    ("Open and transparent", 40.0),
    ("User-owned identity", 60.0),
];

impl Scene for WhatIsBluesky {
    fn name(&self) -> &'static str {
        "what-is-bluesky"
    }

    fn duration_in_frames(&self) -> u32 {
        150
    }

    fn render(&self, frame: u32, _config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::fill(FEED_BG));
        out.push(Layer::text("What is Bluesky?", 160.0, 300.0, 48.0, BLUESKY_BLUE));

        for (i, (text, delay)) in ITEMS.iter().enumerate() {
            let opacity = interpolate(frame as f64, &[*delay, *delay + 15.0], &[0.0, 1.0]);
            let y = 420.0 + i as f64 * 80.0;
            out.push(
                Layer::circle(Rect::new(160.0, y + 10.0, 14.0, 14.0), INK).with_opacity(opacity),
            );
            out.push(Layer::text(*text, 200.0, y, 32.0, INK).with_opacity(opacity));
        }

        out
    }
}
