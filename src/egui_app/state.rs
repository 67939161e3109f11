//! Shared state types for the egui UI.

use std::time::Instant;

use crate::egui_app::anim;

/// Fallback text for the not-a-dog message block.
pub const DEFAULT_NOT_DOG_MESSAGE: &str = "This doesn't appear to be a dog image.";

/// The mutually-exclusive interaction states of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet.
    Idle,
    /// A candidate image is decoded and visible.
    PreviewShown,
    /// A submission is in flight.
    Loading,
    /// A classification result is on screen.
    ResultShown,
}

impl Phase {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn allows(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Idle, PreviewShown)
                | (Idle, Loading)
                | (PreviewShown, PreviewShown)
                | (PreviewShown, Loading)
                | (PreviewShown, ResultShown)
                | (Loading, Loading)
                | (Loading, ResultShown)
                | (Loading, PreviewShown)
                | (Loading, Idle)
                | (ResultShown, PreviewShown)
                | (ResultShown, Loading)
        )
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub phase: Phase,
    pub drop_zone: DropZoneState,
    pub preview: Option<PreviewState>,
    pub loading: Option<LoadingState>,
    pub result: Option<ResultState>,
    pub notices: NoticeState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            drop_zone: DropZoneState::default(),
            preview: None,
            loading: None,
            result: None,
            notices: NoticeState::default(),
        }
    }
}

impl UiState {
    /// Apply a phase transition if the transition table allows it.
    ///
    /// Invalid transitions are logged and ignored rather than corrupting the
    /// current state.
    pub fn transition(&mut self, next: Phase) -> bool {
        if !self.phase.allows(next) {
            tracing::warn!("Ignoring invalid phase transition {:?} -> {next:?}", self.phase);
            return false;
        }
        self.phase = next;
        true
    }
}

/// Highlight state of the click/drop zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropZoneState {
    /// True while files hover over the window.
    pub active: bool,
}

/// A decoded candidate image ready for display.
#[derive(Clone, Debug)]
pub struct PreviewState {
    pub file_name: String,
    /// Pixel dimensions of the decoded preview.
    pub size: [usize; 2],
    /// Sequence number of the decode job that produced this preview.
    pub version: u64,
    /// When the preview was installed; drives the fade-in.
    pub shown_at: Instant,
}

/// Marker for an in-flight submission.
#[derive(Clone, Copy, Debug)]
pub struct LoadingState {
    /// When the submission started; drives the progress dots.
    pub started_at: Instant,
}

/// A classification result being rendered.
#[derive(Clone, Debug)]
pub struct ResultState {
    pub breed: String,
    /// Confidence percentage, 0-100.
    pub confidence: f64,
    pub is_dog: bool,
    pub message: Option<String>,
    /// When the result was installed; drives reveal and confidence animations.
    pub revealed_at: Instant,
}

impl ResultState {
    /// Text for the not-a-dog message block, `None` on the dog branch.
    pub fn not_dog_message(&self) -> Option<&str> {
        if self.is_dog {
            return None;
        }
        Some(self.message.as_deref().unwrap_or(DEFAULT_NOT_DOG_MESSAGE))
    }
}

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Warning,
    Error,
}

/// A transient, self-dismissing toast message.
#[derive(Clone, Debug)]
pub struct Notice {
    pub message: String,
    pub tone: NoticeTone,
    pub posted_at: Instant,
}

/// A notice sliding out of view.
#[derive(Clone, Debug)]
pub struct LeavingNotice {
    pub notice: Notice,
    pub evicted_at: Instant,
}

/// At most one live notice plus one playing its exit animation.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub active: Option<Notice>,
    pub leaving: Option<LeavingNotice>,
}

impl NoticeState {
    /// Install a new notice, evicting the current one into its exit slide.
    pub fn push(&mut self, message: impl Into<String>, tone: NoticeTone) {
        let now = Instant::now();
        if let Some(prior) = self.active.take() {
            self.leaving = Some(LeavingNotice {
                notice: prior,
                evicted_at: now,
            });
        }
        self.active = Some(Notice {
            message: message.into(),
            tone,
            posted_at: now,
        });
    }

    /// Drop both slots immediately. Called on preview and result renders so
    /// stale notices never persist across state transitions.
    pub fn clear(&mut self) {
        self.active = None;
        self.leaving = None;
    }

    /// Advance auto-dismissal: expire the active notice after its dwell and
    /// drop a leaving notice once its exit slide finishes.
    pub fn tick(&mut self, now: Instant) {
        let dwell_over = self
            .active
            .as_ref()
            .is_some_and(|active| now.duration_since(active.posted_at) >= anim::NOTICE_DWELL);
        if dwell_over {
            if let Some(notice) = self.active.take() {
                self.leaving = Some(LeavingNotice {
                    notice,
                    evicted_at: now,
                });
            }
        }
        if let Some(leaving) = &self.leaving {
            if now.duration_since(leaving.evicted_at) >= anim::NOTICE_SLIDE {
                self.leaving = None;
            }
        }
    }

    /// Whether anything is on screen (including exit animations).
    pub fn any_visible(&self) -> bool {
        self.active.is_some() || self.leaving.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn transition_table_accepts_the_submission_cycle() {
        let mut ui = UiState::default();
        assert!(ui.transition(Phase::PreviewShown));
        assert!(ui.transition(Phase::Loading));
        assert!(ui.transition(Phase::ResultShown));
        assert!(ui.transition(Phase::Loading));
        assert!(ui.transition(Phase::PreviewShown));
        // A late preview decode may land mid-submission; the result still
        // has to be installable afterwards.
        assert!(ui.transition(Phase::ResultShown));
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        let mut ui = UiState::default();
        assert!(!ui.transition(Phase::ResultShown));
        assert_eq!(ui.phase, Phase::Idle);
        ui.transition(Phase::PreviewShown);
        assert!(!ui.transition(Phase::Idle));
        assert_eq!(ui.phase, Phase::PreviewShown);
    }

    #[test]
    fn pushing_a_notice_evicts_the_prior_one() {
        let mut notices = NoticeState::default();
        notices.push("first", NoticeTone::Info);
        notices.push("second", NoticeTone::Error);
        assert_eq!(
            notices.active.as_ref().map(|n| n.message.as_str()),
            Some("second")
        );
        assert_eq!(
            notices.leaving.as_ref().map(|l| l.notice.message.as_str()),
            Some("first")
        );
    }

    #[test]
    fn tick_expires_after_dwell_and_exit_slide() {
        let mut notices = NoticeState::default();
        notices.push("old", NoticeTone::Warning);
        let posted = notices.active.as_ref().expect("active").posted_at;

        let at_dwell = posted + anim::NOTICE_DWELL;
        notices.tick(at_dwell);
        assert!(notices.active.is_none());
        assert!(notices.leaving.is_some());

        notices.tick(at_dwell + anim::NOTICE_SLIDE + Duration::from_millis(1));
        assert!(!notices.any_visible());
    }

    #[test]
    fn not_dog_message_falls_back_to_default() {
        let base = ResultState {
            breed: "Unknown".into(),
            confidence: 42.0,
            is_dog: false,
            message: None,
            revealed_at: Instant::now(),
        };
        assert_eq!(base.not_dog_message(), Some(DEFAULT_NOT_DOG_MESSAGE));

        let with_message = ResultState {
            message: Some("No dog detected".into()),
            ..base.clone()
        };
        assert_eq!(with_message.not_dog_message(), Some("No dog detected"));

        let dog = ResultState { is_dog: true, ..base };
        assert_eq!(dog.not_dog_message(), None);
    }
}
