//! Ordered scene sequence with overlapping transitions.
//!
//! Scene `i+1` starts `transition_i.duration_in_frames` frames before scene
//! `i` ends; during that window both scenes evaluate and the transition
//! blends them. Total duration is therefore the sum of scene durations minus
//! the sum of transition durations.

use serde::Serialize;
use thiserror::Error;

use crate::scene::Scene;
use crate::transition::Transition;

/// Errors from timeline assembly.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// A transition was declared with no scene following it.
    #[error("timeline ends with a dangling transition")]
    TrailingTransition,

    /// Two transitions were declared back to back.
    #[error("transition declared before any scene, or two transitions in a row")]
    MisplacedTransition,

    /// The timeline has no scenes.
    #[error("timeline contains no scenes")]
    Empty,

    /// A transition overlap is longer than one of its neighboring scenes.
    #[error("transition after scene '{scene}' is longer than the scene itself")]
    TransitionTooLong {
        /// Name of the scene that is shorter than the overlap.
        scene: &'static str,
    },
}

/// Timing info for one scene, as resolved on the global frame axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneSpan {
    pub name: &'static str,
    /// First global frame of the scene.
    pub start: u32,
    pub duration_in_frames: u32,
}

/// What the composition shows at one global frame.
#[derive(Debug)]
pub enum FrameSample<'a> {
    /// Exactly one scene is active.
    Single {
        scene: &'a dyn Scene,
        /// Scene-local frame index.
        local_frame: u32,
    },
    /// Two scenes overlap inside a transition.
    Blend {
        outgoing: &'a dyn Scene,
        outgoing_frame: u32,
        incoming: &'a dyn Scene,
        incoming_frame: u32,
        transition: Transition,
        /// Linear transition progress in (0, 1].
        progress: f64,
    },
}

/// The assembled composition: scenes, transitions, and resolved starts.
#[derive(Debug)]
pub struct Timeline {
    scenes: Vec<Box<dyn Scene>>,
    transitions: Vec<Transition>,
    starts: Vec<u32>,
    duration: u32,
}

impl Timeline {
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    /// Total composition length in frames.
    pub fn duration_in_frames(&self) -> u32 {
        self.duration
    }

    /// Resolved timing for every scene, in order.
    pub fn scene_spans(&self) -> Vec<SceneSpan> {
        self.scenes
            .iter()
            .zip(&self.starts)
            .map(|(scene, &start)| SceneSpan {
                name: scene.name(),
                start,
                duration_in_frames: scene.duration_in_frames(),
            })
            .collect()
    }

    /// Declared transitions, in order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Resolve a global frame to the scene(s) active at that instant.
    ///
    /// Returns `None` for frames at or beyond the total duration.
    pub fn sample(&self, frame: u32) -> Option<FrameSample<'_>> {
        if frame >= self.duration {
            return None;
        }

        // Last scene whose start is <= frame. Starts are ascending.
        let mut idx = 0;
        for (i, &start) in self.starts.iter().enumerate() {
            if start <= frame {
                idx = i;
            } else {
                break;
            }
        }

        // Inside the overlap with the previous scene?
        if idx > 0 {
            let prev_end = self.starts[idx - 1] + self.scenes[idx - 1].duration_in_frames();
            if frame < prev_end {
                let transition = self.transitions[idx - 1];
                let overlap_frame = frame - self.starts[idx];
                return Some(FrameSample::Blend {
                    outgoing: self.scenes[idx - 1].as_ref(),
                    outgoing_frame: frame - self.starts[idx - 1],
                    incoming: self.scenes[idx].as_ref(),
                    incoming_frame: overlap_frame,
                    transition,
                    progress: transition.progress(overlap_frame),
                });
            }
        }

        Some(FrameSample::Single {
            scene: self.scenes[idx].as_ref(),
            local_frame: frame - self.starts[idx],
        })
    }
}

/// Builds a [`Timeline`] from an alternating scene/transition sequence.
#[derive(Default)]
pub struct TimelineBuilder {
    scenes: Vec<Box<dyn Scene>>,
    transitions: Vec<Transition>,
    pending_transition: Option<Transition>,
    error: Option<TimelineError>,
}

impl TimelineBuilder {
    pub fn scene(mut self, scene: impl Scene + 'static) -> Self {
        if let Some(t) = self.pending_transition.take() {
            self.transitions.push(t);
        }
        self.scenes.push(Box::new(scene));
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        if self.scenes.is_empty() || self.pending_transition.is_some() {
            self.error.get_or_insert(TimelineError::MisplacedTransition);
            return self;
        }
        self.pending_transition = Some(transition);
        self
    }

    pub fn build(self) -> Result<Timeline, TimelineError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.pending_transition.is_some() {
            return Err(TimelineError::TrailingTransition);
        }
        if self.scenes.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut starts = Vec::with_capacity(self.scenes.len());
        let mut cursor: u32 = 0;
        for (i, scene) in self.scenes.iter().enumerate() {
            starts.push(cursor);
            let duration = scene.duration_in_frames();
            if i < self.transitions.len() {
                let overlap = self.transitions[i].duration_in_frames;
                if overlap > duration || overlap > self.scenes[i + 1].duration_in_frames() {
                    return Err(TimelineError::TransitionTooLong {
                        scene: scene.name(),
                    });
                }
                cursor += duration - overlap;
            } else {
                cursor += duration;
            }
        }

        Ok(Timeline {
            scenes: self.scenes,
            transitions: self.transitions,
            starts,
            duration: cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneFrame, VideoConfig};
    use crate::transition::WipeDirection;

    #[derive(Debug)]
    struct Stub(&'static str, u32);

    impl Scene for Stub {
        fn name(&self) -> &'static str {
            self.0
        }
        fn duration_in_frames(&self) -> u32 {
            self.1
        }
        fn render(&self, _frame: u32, _config: &VideoConfig) -> SceneFrame {
            SceneFrame::new()
        }
    }

    fn two_scene_timeline() -> Timeline {
        Timeline::builder()
            .scene(Stub("a", 100))
            .transition(Transition::fade(20))
            .scene(Stub("b", 50))
            .build()
            .unwrap()
    }

    #[test]
    fn duration_subtracts_overlaps() {
        let t = two_scene_timeline();
        assert_eq!(t.duration_in_frames(), 130);
    }

    #[test]
    fn spans_report_resolved_starts() {
        let t = two_scene_timeline();
        let spans = t.scene_spans();
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].start, 80);
    }

    #[test]
    fn sample_outside_overlap_is_single() {
        let t = two_scene_timeline();
        match t.sample(10) {
            Some(FrameSample::Single { scene, local_frame }) => {
                assert_eq!(scene.name(), "a");
                assert_eq!(local_frame, 10);
            }
            other => panic!("unexpected sample: {other:?}"),
        }
        match t.sample(100) {
            Some(FrameSample::Single { scene, local_frame }) => {
                assert_eq!(scene.name(), "b");
                assert_eq!(local_frame, 20);
            }
            other => panic!("unexpected sample: {other:?}"),
        }
    }

    #[test]
    fn sample_in_overlap_blends_both_scenes() {
        let t = two_scene_timeline();
        match t.sample(90) {
            Some(FrameSample::Blend {
                outgoing,
                outgoing_frame,
                incoming,
                incoming_frame,
                progress,
                ..
            }) => {
                assert_eq!(outgoing.name(), "a");
                assert_eq!(outgoing_frame, 90);
                assert_eq!(incoming.name(), "b");
                assert_eq!(incoming_frame, 10);
                assert!(progress > 0.0 && progress <= 1.0);
            }
            other => panic!("unexpected sample: {other:?}"),
        }
    }

    #[test]
    fn sample_past_end_is_none() {
        let t = two_scene_timeline();
        assert!(t.sample(130).is_none());
    }

    #[test]
    fn trailing_transition_is_rejected() {
        let err = Timeline::builder()
            .scene(Stub("a", 10))
            .transition(Transition::wipe(5, WipeDirection::FromLeft))
            .build()
            .unwrap_err();
        assert!(matches!(err, TimelineError::TrailingTransition));
    }

    #[test]
    fn overlong_transition_is_rejected() {
        let err = Timeline::builder()
            .scene(Stub("a", 10))
            .transition(Transition::fade(15))
            .scene(Stub("b", 40))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TimelineError::TransitionTooLong { scene: "a" }
        ));
    }
}
