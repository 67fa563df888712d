//! Scene 4: the feature card grid.

use crate::anim::{spring, SpringConfig};
use crate::color::Color;
use crate::layer::{Layer, Rect, Transform};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::{BLUESKY_BLUE, FEED_BG, MUTED};

/// Four feature cards in a 2x2 grid, each springing in 15 frames after the
/// previous one.
#[derive(Debug)]
pub struct Features;

const CARDS: [(&str, &str); 4] = [
    ("Open Source", "Transparent codebase"),
    ("Custom Feeds", "Control your timeline"),
    ("Moderation", "Community-driven safety"),
    ("Portable", "Take your identity anywhere"),
];

const CARD_W: f64 = 380.0;
const CARD_H: f64 = 220.0;
const GAP: f64 = 40.0;

impl Scene for Features {
    fn name(&self) -> &'static str {
        "features"
    }

    fn duration_in_frames(&self) -> u32 {
        150
    }

    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::fill(FEED_BG));

        let cx = config.center_x();
        out.push(Layer::text_centered("Key Features", cx, 140.0, 48.0, BLUESKY_BLUE));

        let grid_w = CARD_W * 2.0 + GAP;
        let grid_h = CARD_H * 2.0 + GAP;
        let origin_x = cx - grid_w / 2.0;
        let origin_y = config.center_y() - grid_h / 2.0 + 60.0;

        for (i, (title, desc)) in CARDS.iter().enumerate() {
            let delay = i as f64 * 15.0;
            let scale = spring(
                frame as f64 - delay,
                config.fps as f64,
                SpringConfig::with_damping(200.0),
            );
            let col = (i % 2) as f64;
            let row = (i / 2) as f64;
            let card = Rect::new(
                origin_x + col * (CARD_W + GAP),
                origin_y + row * (CARD_H + GAP),
                CARD_W,
                CARD_H,
            );
            let (px, py) = card.center();
            let transform = Transform::scale_about(scale, px, py);

            out.push(Layer::rect(card, Color::white(), 16.0).with_transform(transform));
            out.push(
                Layer::text(*title, card.x + 30.0, card.y + 50.0, 24.0, BLUESKY_BLUE)
                    .with_transform(transform),
            );
            out.push(
                Layer::text(*desc, card.x + 30.0, card.y + 110.0, 18.0, MUTED)
                    .with_transform(transform),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerKind;

    #[test]
    fn four_cards_with_staggered_entry() {
        let config = VideoConfig::default();
        let rendered = Features.render(20, &config);
        let scales: Vec<f64> = rendered
            .layers
            .iter()
            .filter(|l| matches!(l.kind, LayerKind::Rect { .. }))
            .map(|l| l.transform.scale)
            .collect();
        assert_eq!(scales.len(), 4);
        // Card 0 is 20 frames in, card 1 is 5 frames in, the rest unstarted.
        assert!(scales[0] > scales[1]);
        assert!(scales[1] > 0.0);
        assert_eq!(scales[2], 0.0);
        assert_eq!(scales[3], 0.0);
    }

    #[test]
    fn card_parts_share_a_pivot() {
        let config = VideoConfig::default();
        let rendered = Features.render(30, &config);
        // The first card's rect and its title text must transform as a unit.
        let transforms: Vec<_> = rendered
            .layers
            .iter()
            .skip(2) // background fill + heading
            .take(3)
            .map(|l| l.transform)
            .collect();
        assert_eq!(transforms[0], transforms[1]);
        assert_eq!(transforms[1], transforms[2]);
    }
}
