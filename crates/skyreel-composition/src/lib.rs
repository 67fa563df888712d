//! Skyreel video composition.
//!
//! A declarative, frame-indexed scene graph for the Bluesky promotional
//! video. Every scene is a pure function of `(frame, VideoConfig)`: the same
//! frame index always yields the same layers, with no mutable state shared
//! between evaluations, so a rendering host may evaluate frames in any order
//! (or in parallel).
//!
//! The composition itself performs no I/O. Rasterization lives in
//! `skyreel-render`; the soundtrack referenced by [`audio::AudioTrack`] is
//! produced by `skyreel-soundtrack`.

pub mod anim;
pub mod audio;
pub mod color;
pub mod layer;
pub mod promo;
pub mod scene;
pub mod scenes;
pub mod timeline;
pub mod transition;

pub use audio::AudioTrack;
pub use color::Color;
pub use layer::{Layer, LayerKind, Rect, TextAlign, Transform};
pub use promo::{promo_audio, promo_timeline};
pub use scene::{Scene, SceneFrame, VideoConfig};
pub use timeline::{FrameSample, SceneSpan, Timeline, TimelineError};
pub use transition::{Presentation, Transition, WipeDirection};
