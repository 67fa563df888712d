//! Scene 3: three network nodes on a dark backdrop.

use crate::anim::{spring, SpringConfig};
use crate::color::Color;
use crate::layer::{Layer, Rect, Transform};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::{BLUESKY_BLUE, NIGHT_BG};

/// Three node discs spring in one after another, then the caption appears.
#[derive(Debug)]
pub struct Decentralization;

const NODE_SIZE: f64 = 150.0;

impl Scene for Decentralization {
    fn name(&self) -> &'static str {
        "decentralization"
    }

    fn duration_in_frames(&self) -> u32 {
        120
    }

    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::fill(NIGHT_BG));

        let cx = config.center_x();
        out.push(Layer::text_centered(
            "Decentralized Network",
            cx,
            260.0,
            48.0,
            BLUESKY_BLUE,
        ));

        // Nodes spread evenly across the middle band.
        let spacing = config.width as f64 / 4.0;
        for i in 0..3u32 {
            let delay = i as f64 * 10.0;
            let scale = spring(
                frame as f64 - delay,
                config.fps as f64,
                SpringConfig::with_damping(200.0),
            );
            let node_cx = spacing * (i as f64 + 1.0);
            let node = Rect::new(
                node_cx - NODE_SIZE / 2.0,
                config.center_y() - NODE_SIZE / 2.0,
                NODE_SIZE,
                NODE_SIZE,
            );
            let (px, py) = node.center();
            out.push(
                Layer::circle(node, BLUESKY_BLUE)
                    .with_transform(Transform::scale_about(scale, px, py)),
            );
        }

        if frame >= 40 {
            out.push(Layer::text_centered(
                "No single entity controls your data",
                cx,
                config.center_y() + 180.0,
                28.0,
                Color::white(),
            ));
        }

        out
    }
}
