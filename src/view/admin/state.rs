use crate::api::AnnouncementDraft;
use crate::view::mvi::ViewState;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The server created the announcement with this id.
    Created(i64),
    /// The submission failed; the draft was kept for another attempt.
    Failed(String),
}

/// State of the announcement form.
///
/// The form is always editable except while a submission is in flight;
/// `submitting` doubles as the disabled flag for every control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminFormState {
    pub draft: AnnouncementDraft,
    /// The admin token travels next to the draft but survives a
    /// successful submission, unlike every draft field.
    pub token: String,
    pub submitting: bool,
    pub status: Option<SubmitStatus>,
}

impl ViewState for AdminFormState {}

impl AdminFormState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
