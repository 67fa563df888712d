//! Scene 6: closing call to action.

use crate::anim::{interpolate, spring, SpringConfig};
use crate::color::Color;
use crate::layer::{Layer, Rect, Transform};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::BLUESKY_BLUE;

/// Headline, fading tagline, and the `bsky.app` pill springing in.
#[derive(Debug)]
pub struct CallToAction;

impl Scene for CallToAction {
    fn name(&self) -> &'static str {
        "call-to-action"
    }

    fn duration_in_frames(&self) -> u32 {
        120
    }

    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::fill(BLUESKY_BLUE));

        let cx = config.center_x();
        let cy = config.center_y();

        out.push(Layer::text_centered("Join Bluesky Today!", cx, cy - 160.0, 56.0, Color::white()));

        let tagline_opacity = interpolate(frame as f64, &[10.0, 25.0], &[0.0, 1.0]);
        out.push(
            Layer::text_centered(
                "Be part of the decentralized future",
                cx,
                cy - 40.0,
                28.0,
                Color::white(),
            )
            .with_opacity(tagline_opacity),
        );

        let button_scale = spring(
            frame as f64 - 20.0,
            config.fps as f64,
            SpringConfig::with_damping(200.0),
        );
        let button = Rect::new(cx - 140.0, cy + 60.0, 280.0, 80.0);
        let (px, py) = button.center();
        let transform = Transform::scale_about(button_scale, px, py);
        out.push(Layer::rect(button, Color::white(), 50.0).with_transform(transform));
        out.push(
            Layer::text_centered("bsky.app", cx, button.y + 28.0, 24.0, BLUESKY_BLUE)
                .with_transform(transform),
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerKind;

    #[test]
    fn tagline_fades_in_over_frames_10_to_25() {
        let config = VideoConfig::default();
        let opacity = |frame: u32| {
            CallToAction
                .render(frame, &config)
                .layers
                .iter()
                .find_map(|l| match &l.kind {
                    LayerKind::Text { content, .. } if content.starts_with("Be part") => {
                        Some(l.opacity)
                    }
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(opacity(10), 0.0);
        assert!(opacity(17) > 0.0 && opacity(17) < 1.0);
        assert_eq!(opacity(25), 1.0);
    }

    #[test]
    fn button_springs_in_from_frame_20() {
        let config = VideoConfig::default();
        let button_scale = |frame: u32| {
            CallToAction
                .render(frame, &config)
                .layers
                .iter()
                .find_map(|l| match l.kind {
                    LayerKind::Rect { .. } => Some(l.transform.scale),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(button_scale(20), 0.0);
        assert!(button_scale(40) > 0.5);
    }
}
