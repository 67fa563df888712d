//! Background audio layer: soundtrack reference and volume envelope.

use serde::Serialize;

use crate::anim::interpolate;

/// Path the capture pipeline writes the deliverable to, relative to the
/// static asset root. The composition references it by convention only.
pub const SOUNDTRACK_SRC: &str = "music/soundtrack.mp3";

/// The global audio layer: one track playing for the full composition with
/// a trapezoidal volume envelope (silence, ramp up, plateau, ramp down).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioTrack {
    /// Asset path of the audio file.
    pub src: String,
    /// Ramp-up window starting at frame 0.
    pub fade_in_frames: u32,
    /// Ramp-down window ending at the final frame.
    pub fade_out_frames: u32,
    /// Plateau volume level.
    pub level: f64,
}

impl Default for AudioTrack {
    fn default() -> Self {
        Self {
            src: SOUNDTRACK_SRC.to_string(),
            fade_in_frames: 30,
            fade_out_frames: 60,
            level: 0.3,
        }
    }
}

impl AudioTrack {
    /// Volume at a frame, for a composition of `duration_in_frames` frames.
    ///
    /// 0 at frame 0, `level` from the fade-in boundary to the fade-out
    /// boundary, 0 again at the final frame. Frames outside
    /// `[0, duration_in_frames]` clamp to the nearest boundary value.
    pub fn volume_at(&self, frame: i64, duration_in_frames: u32) -> f64 {
        let duration = duration_in_frames as f64;
        interpolate(
            frame as f64,
            &[
                0.0,
                self.fade_in_frames as f64,
                duration - self.fade_out_frames as f64,
                duration,
            ],
            &[0.0, self.level, self.level, 0.0],
        )
    }
}
