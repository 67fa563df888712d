//! The assembled Bluesky promo composition.

use crate::audio::AudioTrack;
use crate::scenes::{
    BlueskyUiDemo, CallToAction, Decentralization, Features, Intro, WhatIsBluesky,
};
use crate::timeline::Timeline;
use crate::transition::{Transition, WipeDirection};

/// Six scenes joined by fades and wipes; 680 frames at 30 fps.
pub fn promo_timeline() -> Timeline {
    Timeline::builder()
        .scene(Intro)
        .transition(Transition::fade(30))
        .scene(WhatIsBluesky)
        .transition(Transition::wipe(20, WipeDirection::FromLeft))
        .scene(Decentralization)
        .transition(Transition::fade(30))
        .scene(Features)
        .transition(Transition::fade(30))
        .scene(BlueskyUiDemo)
        .transition(Transition::wipe(20, WipeDirection::FromBottom))
        .scene(CallToAction)
        .build()
        .unwrap_or_else(|err| panic!("promo timeline is statically valid: {err}"))
}

/// The soundtrack layer with the default trapezoidal envelope.
pub fn promo_audio() -> AudioTrack {
    AudioTrack::default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scene::VideoConfig;
    use crate::timeline::FrameSample;

    #[test]
    fn total_duration_is_680_frames() {
        assert_eq!(promo_timeline().duration_in_frames(), 680);
    }

    #[test]
    fn scene_starts_account_for_overlaps() {
        let spans = promo_timeline().scene_spans();
        let starts: Vec<u32> = spans.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 90, 220, 310, 430, 560]);
        assert_eq!(spans[0].name, "intro");
        assert_eq!(spans[5].name, "call-to-action");
    }

    #[test]
    fn every_frame_resolves() {
        let timeline = promo_timeline();
        for frame in 0..timeline.duration_in_frames() {
            assert!(timeline.sample(frame).is_some(), "frame {frame} unresolved");
        }
        assert!(timeline.sample(680).is_none());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let timeline = promo_timeline();
        let config = VideoConfig::default();
        for frame in [0, 95, 230, 445, 679] {
            let layers = |sample: Option<FrameSample<'_>>| match sample {
                Some(FrameSample::Single { scene, local_frame }) => {
                    scene.render(local_frame, &config).layers
                }
                Some(FrameSample::Blend {
                    incoming,
                    incoming_frame,
                    ..
                }) => incoming.render(incoming_frame, &config).layers,
                None => panic!("frame {frame} unresolved"),
            };
            let first = layers(timeline.sample(frame));
            let second = layers(timeline.sample(frame));
            assert_eq!(first, second, "frame {frame} not deterministic");
        }
    }

    #[test]
    fn audio_envelope_matches_timeline_duration() {
        let timeline = promo_timeline();
        let audio = promo_audio();
        let dur = timeline.duration_in_frames();
        assert_eq!(audio.volume_at(0, dur), 0.0);
        assert_eq!(audio.volume_at(30, dur), 0.3);
        assert_eq!(audio.volume_at(dur as i64 - 60, dur), 0.3);
        assert_eq!(audio.volume_at(dur as i64, dur), 0.0);
    }
}
