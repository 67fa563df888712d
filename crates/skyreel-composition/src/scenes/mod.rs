//! The six scenes of the Bluesky promo.

mod call_to_action;
mod decentralization;
mod features;
mod intro;
mod post;
mod ui_demo;
mod what_is;

pub use call_to_action::CallToAction;
pub use decentralization::Decentralization;
pub use features::Features;
pub use intro::Intro;
pub use ui_demo::{viral_card, BlueskyUiDemo, ViralCard, VIRAL_CARD_COUNT, VIRAL_START_FRAME};
pub use what_is::WhatIsBluesky;

use crate::color::Color;

/// Bluesky brand blue.
pub const BLUESKY_BLUE: Color = Color::rgb8(0x00, 0xA8, 0xE8);
/// Light feed background.
pub const FEED_BG: Color = Color::rgb8(0xF5, 0xF8, 0xFA);
/// Dark night background of the decentralization scene.
pub const NIGHT_BG: Color = Color::rgb8(0x1A, 0x1A, 0x2E);
/// Primary text.
pub const INK: Color = Color::rgb8(0x33, 0x33, 0x33);
/// Secondary text.
pub const MUTED: Color = Color::rgb8(0x66, 0x66, 0x66);
/// "WOW!" comic accent.
pub const COMIC_RED: Color = Color::rgb8(0xFF, 0x6B, 0x6B);
/// "REPOST!" comic accent.
pub const COMIC_TEAL: Color = Color::rgb8(0x4E, 0xCD, 0xC4);
/// Comic checkerboard tones.
pub const PEACH_A: Color = Color::rgb8(0xFF, 0xE5, 0xB4);
pub const PEACH_B: Color = Color::rgb8(0xFF, 0xDA, 0xB9);
