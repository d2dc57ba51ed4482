//! Application state definitions

use super::forms::VolunteerForm;

/// Lifecycle of the one outstanding submission.
///
/// `Submitting` is entered only after every validator passed; `Succeeded` is
/// transient (a successful submission immediately resets the form and
/// returns to `Idle`, leaving the success banner flag behind); `Failed`
/// carries the display reason and leaves the form contents untouched so the
/// user can correct and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The error banner text, if the last submission failed
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Main application state: one controller instance per page view
#[derive(Debug, Default)]
pub struct AppState {
    pub form: VolunteerForm,
    pub submission: SubmissionState,
    /// Success banner shown after a completed submission, until the next edit
    pub show_success: bool,
}
