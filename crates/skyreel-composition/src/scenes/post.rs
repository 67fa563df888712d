//! Shared post-card building block for the UI demo scene.

use crate::color::Color;
use crate::layer::{Layer, Rect, Transform};

use super::{BLUESKY_BLUE, INK, MUTED};

/// Content of one feed post.
#[derive(Debug, Clone)]
pub struct PostContent {
    pub name: &'static str,
    pub handle: &'static str,
    pub body: &'static str,
    pub likes: u32,
    pub reposts: u32,
    /// `Some(who)` renders a "reposted" line above the post.
    pub reposted_by: Option<String>,
}

impl PostContent {
    /// The post every stage of the demo reuses.
    pub fn base(reposts: u32) -> Self {
        Self {
            name: "Creative Coder",
            handle: "creativecoder",
            body: "Just discovered Bluesky! Love that I actually own my data here.",
            likes: 42,
            reposts,
            reposted_by: None,
        }
    }
}

const PAD: f64 = 20.0;
const AVATAR: f64 = 48.0;
const BODY_SIZE: f64 = 18.0;
const BODY_LINE_H: f64 = 26.0;

/// Layers for one post card at `rect`. Every layer shares `transform` and
/// `opacity` so the card moves and fades as a unit.
pub fn post_card_layers(
    content: &PostContent,
    rect: Rect,
    transform: Transform,
    opacity: f64,
) -> Vec<Layer> {
    let mut layers = Vec::new();
    let mut y = rect.y + PAD;

    layers.push(
        Layer::rect(rect, Color::white(), 16.0)
            .with_transform(transform)
            .with_opacity(opacity),
    );

    if let Some(who) = &content.reposted_by {
        layers.push(
            Layer::text(format!("{who} reposted"), rect.x + PAD, y, 14.0, MUTED)
                .with_transform(transform)
                .with_opacity(opacity),
        );
        y += 26.0;
    }

    layers.push(
        Layer::circle(Rect::new(rect.x + PAD, y, AVATAR, AVATAR), BLUESKY_BLUE)
            .with_transform(transform)
            .with_opacity(opacity),
    );

    let text_x = rect.x + PAD + AVATAR + 12.0;
    layers.push(
        Layer::text(content.name, text_x, y + 4.0, 16.0, INK)
            .with_transform(transform)
            .with_opacity(opacity),
    );
    layers.push(
        Layer::text(format!("@{}", content.handle), text_x, y + 26.0, 14.0, MUTED)
            .with_transform(transform)
            .with_opacity(opacity),
    );
    y += AVATAR + 16.0;

    let wrap_width = rect.w - (PAD * 2.0 + AVATAR + 12.0);
    for line in wrap_text(content.body, wrap_width, BODY_SIZE) {
        layers.push(
            Layer::text(line, text_x, y, BODY_SIZE, INK)
                .with_transform(transform)
                .with_opacity(opacity),
        );
        y += BODY_LINE_H;
    }

    let stats = format!("12 comments   {} reposts   {} likes", content.reposts, content.likes);
    layers.push(
        Layer::text(stats, text_x, y + 6.0, 14.0, MUTED)
            .with_transform(transform)
            .with_opacity(opacity),
    );

    layers
}

/// Greedy word wrap against the bitmap font's fixed advance (six cells per
/// glyph at `size / 7` pixels each).
fn wrap_text(text: &str, max_width: f64, size: f64) -> Vec<String> {
    let advance = size / 7.0 * 6.0;
    let max_chars = (max_width / advance).max(1.0) as usize;

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_layers_share_transform_and_opacity() {
        let content = PostContent::base(23);
        let t = Transform::scale_about(0.7, 100.0, 100.0);
        let layers = post_card_layers(&content, Rect::new(0.0, 0.0, 360.0, 240.0), t, 0.5);
        assert!(!layers.is_empty());
        for layer in &layers {
            assert_eq!(layer.transform, t);
            assert_eq!(layer.opacity, 0.5);
        }
    }

    #[test]
    fn repost_line_only_when_attributed() {
        let plain = PostContent::base(23);
        let mut reposted = PostContent::base(24);
        reposted.reposted_by = Some("Tech Explorer".to_string());

        let rect = Rect::new(0.0, 0.0, 360.0, 240.0);
        let plain_layers = post_card_layers(&plain, rect, Transform::IDENTITY, 1.0);
        let repost_layers = post_card_layers(&reposted, rect, Transform::IDENTITY, 1.0);
        assert_eq!(repost_layers.len(), plain_layers.len() + 1);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("one two three four five six seven", 200.0, 18.0);
        assert!(lines.len() > 1);
        let max_chars = (200.0 / (18.0 / 7.0 * 6.0)) as usize;
        for line in &lines {
            assert!(line.chars().count() <= max_chars, "line too long: {line}");
        }
    }
}
