//! Scene 5: the comic-styled UI demo with the staged repost and the viral
//! spread.
//!
//! The viral cards use deterministic index arithmetic for placement, so the
//! same frame always produces the same layers.

use crate::anim::{interpolate, spring, SpringConfig};
use crate::color::Color;
use crate::layer::{Layer, Rect, Transform};
use crate::scene::{Scene, SceneFrame, VideoConfig};

use super::post::{post_card_layers, PostContent};
use super::{BLUESKY_BLUE, COMIC_RED, COMIC_TEAL, FEED_BG, PEACH_A, PEACH_B};

/// First frame of the viral phase.
pub const VIRAL_START_FRAME: u32 = 80;
/// Number of duplicate cards in the viral spread.
pub const VIRAL_CARD_COUNT: usize = 30;

const PHONE_W: f64 = 400.0;
const PHONE_H: f64 = 700.0;
const VIRAL_CARD_W: f64 = 300.0;
const VIRAL_CARD_H: f64 = 200.0;

/// Placement and animation state of one viral card at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViralCard {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

/// Evaluates viral card `index` at a scene-local frame.
///
/// Card `i` starts at frame `80 + i*2` and is absent before then. Its
/// placement derives from the index alone: `x = (i*277) % width`,
/// `y = (i*173) % height`, base scale `0.3 + (i%3)*0.1`, rotation
/// `(i*37) % 30 - 15` degrees. The scale springs in (damping 100) and the
/// opacity ramps 0 to 0.9 over the first five frames.
pub fn viral_card(index: usize, frame: u32, config: &VideoConfig) -> Option<ViralCard> {
    let start = VIRAL_START_FRAME + index as u32 * 2;
    if frame <= start {
        return None;
    }
    let progress = (frame - start) as f64;

    let base_scale = 0.3 + (index % 3) as f64 * 0.1;
    let entry = spring(progress, config.fps as f64, SpringConfig::with_damping(100.0));

    Some(ViralCard {
        x: ((index * 277) % config.width as usize) as f64,
        y: ((index * 173) % config.height as usize) as f64,
        scale: entry * base_scale,
        rotation_deg: ((index * 37) % 30) as f64 - 15.0,
        opacity: interpolate(progress, &[0.0, 5.0], &[0.0, 0.9]),
    })
}

/// The staged demo: base post, repost counter flip, repost card, comic
/// callouts, then the viral spread.
#[derive(Debug)]
pub struct BlueskyUiDemo;

impl Scene for BlueskyUiDemo {
    fn name(&self) -> &'static str {
        "bluesky-ui-demo"
    }

    fn duration_in_frames(&self) -> u32 {
        150
    }

    fn render(&self, frame: u32, config: &VideoConfig) -> SceneFrame {
        let mut out = SceneFrame::new();
        out.push(Layer::checker(PEACH_A, PEACH_B, 20.0));

        let cx = config.center_x();
        let cy = config.center_y();

        // Comic title pill.
        let pill = Rect::new(cx - 260.0, 40.0, 520.0, 60.0);
        out.push(Layer::rect(pill, Color::white(), 20.0));
        out.push(Layer::text_centered(
            "See How Bluesky Works!",
            cx,
            56.0,
            28.0,
            BLUESKY_BLUE,
        ));

        // Phone mockup with the feed inside.
        let phone = Rect::new(cx - PHONE_W / 2.0, cy - PHONE_H / 2.0, PHONE_W, PHONE_H);
        out.push(Layer::rect(phone, Color::rgb8(0x1A, 0x1A, 0x1A), 40.0));
        let screen = Rect::new(phone.x + 8.0, phone.y + 8.0, PHONE_W - 16.0, PHONE_H - 16.0);
        out.push(Layer::rect(screen, FEED_BG, 32.0));
        out.push(Layer::rect(
            Rect::new(screen.x, screen.y, screen.w, 40.0),
            Color::white(),
            0.0,
        ));
        out.push(Layer::text_centered("Bluesky", cx, screen.y + 12.0, 16.0, BLUESKY_BLUE));

        // Base post; its repost counter flips once the demo "clicks".
        let repost_count = if frame > 50 { 24 } else { 23 };
        let base_rect = Rect::new(screen.x + 16.0, screen.y + 56.0, screen.w - 32.0, 230.0);
        out.layers.extend(post_card_layers(
            &PostContent::base(repost_count),
            base_rect,
            Transform::IDENTITY,
            1.0,
        ));

        // The repost card enters at frame 60.
        if frame >= 60 {
            let scale = spring(
                frame as f64 - 60.0,
                config.fps as f64,
                SpringConfig::with_damping(200.0),
            );
            let opacity = interpolate(frame as f64, &[60.0, 70.0], &[0.0, 1.0]);
            let repost_rect = Rect::new(
                base_rect.x,
                base_rect.y + base_rect.h + 16.0,
                base_rect.w,
                250.0,
            );
            let (px, py) = repost_rect.center();
            let mut content = PostContent::base(24);
            content.name = "Tech Explorer";
            content.handle = "techexplorer";
            content.reposted_by = Some("Tech Explorer".to_string());
            out.layers.extend(post_card_layers(
                &content,
                repost_rect,
                Transform::scale_about(scale, px, py),
                opacity,
            ));
        }

        // "Click to repost!" bubble, frames 40 to 80.
        if (40..80).contains(&frame) {
            let scale = interpolate(frame as f64 - 40.0, &[0.0, 10.0], &[0.0, 1.0]);
            let bubble = Rect::new(phone.x + PHONE_W - 60.0, phone.y + 180.0, 190.0, 40.0);
            let (px, py) = bubble.center();
            let transform = Transform::scale_about(scale, px, py);
            out.push(Layer::rect(bubble, BLUESKY_BLUE, 20.0).with_transform(transform));
            out.push(
                Layer::text_centered("Click to repost!", px, bubble.y + 12.0, 14.0, Color::white())
                    .with_transform(transform),
            );
        }

        // Comic action words.
        if (50..70).contains(&frame) {
            let scale = interpolate(frame as f64 - 50.0, &[0.0, 5.0], &[0.0, 1.2]);
            out.push(
                Layer::text_centered(
                    "WOW!",
                    config.width as f64 * 0.85,
                    config.height as f64 * 0.2,
                    48.0,
                    COMIC_RED,
                )
                .with_transform(Transform::scale_rotate_about(
                    scale,
                    -15.0,
                    config.width as f64 * 0.85,
                    config.height as f64 * 0.2,
                )),
            );
        }
        if (70..90).contains(&frame) {
            let scale = interpolate(frame as f64 - 70.0, &[0.0, 5.0], &[0.0, 1.2]);
            out.push(
                Layer::text_centered(
                    "REPOST!",
                    config.width as f64 * 0.15,
                    config.height as f64 * 0.8,
                    36.0,
                    COMIC_TEAL,
                )
                .with_transform(Transform::scale_rotate_about(
                    scale,
                    10.0,
                    config.width as f64 * 0.15,
                    config.height as f64 * 0.8,
                )),
            );
        }

        // Viral phase: dark overlay, duplicate cards, headline.
        if frame >= VIRAL_START_FRAME {
            let overlay = interpolate(
                frame as f64,
                &[VIRAL_START_FRAME as f64, VIRAL_START_FRAME as f64 + 10.0],
                &[0.0, 1.0],
            );
            out.push(Layer::fill(Color::black()).with_opacity(0.9 * overlay));

            for i in 0..VIRAL_CARD_COUNT {
                let Some(card) = viral_card(i, frame, config) else {
                    continue;
                };
                let rect = Rect::new(card.x, card.y, VIRAL_CARD_W, VIRAL_CARD_H);
                let (px, py) = rect.center();
                let mut content = PostContent::base(24 + i as u32 * 5);
                content.name = "Viral Post";
                content.handle = "everyone";
                content.likes = 42 + i as u32 * 10;
                content.reposted_by = Some(format!("User{}", i + 1));
                out.layers.extend(post_card_layers(
                    &content,
                    rect,
                    Transform::scale_rotate_about(card.scale, card.rotation_deg, px, py),
                    card.opacity,
                ));
            }

            if frame >= VIRAL_START_FRAME + 30 {
                out.push(Layer::text_centered("GOING VIRAL!", cx, cy - 40.0, 64.0, BLUESKY_BLUE));
                out.push(Layer::text_centered(
                    "Your ideas spread across the network",
                    cx,
                    cy + 60.0,
                    24.0,
                    Color::white(),
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerKind;

    #[test]
    fn viral_card_absent_before_its_start() {
        let config = VideoConfig::default();
        for i in [0usize, 7, 29] {
            let start = VIRAL_START_FRAME + i as u32 * 2;
            assert!(viral_card(i, start.saturating_sub(1), &config).is_none());
            assert!(viral_card(i, start, &config).is_none());
            assert!(viral_card(i, start + 1, &config).is_some());
        }
    }

    #[test]
    fn viral_card_opacity_saturates_after_five_frames() {
        let config = VideoConfig::default();
        for i in [0usize, 11, 29] {
            let start = VIRAL_START_FRAME + i as u32 * 2;
            let ramping = viral_card(i, start + 3, &config).unwrap();
            assert!(ramping.opacity < 0.9);
            let saturated = viral_card(i, start + 5, &config).unwrap();
            assert_eq!(saturated.opacity, 0.9);
            let later = viral_card(i, start + 40, &config).unwrap();
            assert_eq!(later.opacity, 0.9);
        }
    }

    #[test]
    fn viral_card_placement_is_index_arithmetic() {
        let config = VideoConfig::default();
        let card = viral_card(5, 120, &config).unwrap();
        assert_eq!(card.x, ((5 * 277) % 1920) as f64);
        assert_eq!(card.y, ((5 * 173) % 1080) as f64);
        assert_eq!(card.rotation_deg, ((5 * 37) % 30) as f64 - 15.0);

        // Base scale cycles 0.3 / 0.4 / 0.5 with the index.
        let settled = |i: usize| viral_card(i, 149, &config).unwrap().scale;
        assert!((settled(0) - 0.3).abs() < 0.05);
        assert!((settled(1) - 0.4).abs() < 0.05);
        assert!((settled(2) - 0.5).abs() < 0.05);
    }

    #[test]
    fn repost_counter_flips_after_frame_50() {
        let config = VideoConfig::default();
        let counter = |frame: u32| {
            BlueskyUiDemo
                .render(frame, &config)
                .layers
                .iter()
                .find_map(|l| match &l.kind {
                    LayerKind::Text { content, .. } if content.contains("reposts") => {
                        Some(content.clone())
                    }
                    _ => None,
                })
                .unwrap()
        };
        assert!(counter(50).contains("23 reposts"));
        assert!(counter(51).contains("24 reposts"));
    }

    #[test]
    fn viral_headline_appears_at_frame_110() {
        let config = VideoConfig::default();
        let has_headline = |frame: u32| {
            BlueskyUiDemo.render(frame, &config).layers.iter().any(|l| {
                matches!(&l.kind, LayerKind::Text { content, .. } if content == "GOING VIRAL!")
            })
        };
        assert!(!has_headline(109));
        assert!(has_headline(110));
    }
}
