//! Transitions between adjacent scenes.

use serde::Serialize;

/// Direction a wipe reveals the incoming scene from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WipeDirection {
    FromLeft,
    FromRight,
    FromTop,
    FromBottom,
}

/// How the incoming scene is presented over the outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// Incoming scene cross-fades in over the outgoing scene.
    Fade,
    /// Incoming scene is revealed along a direction.
    Wipe(WipeDirection),
}

/// A timed blend inserted between two adjacent scenes. The two scenes
/// overlap for `duration_in_frames` frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration_in_frames: u32,
    pub presentation: Presentation,
}

impl Transition {
    pub fn fade(duration_in_frames: u32) -> Self {
        Self {
            duration_in_frames,
            presentation: Presentation::Fade,
        }
    }

    pub fn wipe(duration_in_frames: u32, direction: WipeDirection) -> Self {
        Self {
            duration_in_frames,
            presentation: Presentation::Wipe(direction),
        }
    }

    /// Linear progress through the overlap, in (0, 1].
    ///
    /// `overlap_frame` is 0 on the first overlapping frame; progress reaches
    /// exactly 1.0 on the last one.
    pub fn progress(&self, overlap_frame: u32) -> f64 {
        if self.duration_in_frames == 0 {
            return 1.0;
        }
        ((overlap_frame + 1) as f64 / self.duration_in_frames as f64).min(1.0)
    }
}
