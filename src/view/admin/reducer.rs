use crate::api::AnnouncementDraft;
use crate::view::admin::intent::{AdminIntent, FieldEdit};
use crate::view::admin::state::{AdminFormState, SubmitStatus};
use crate::view::mvi::Reducer;

/// Fallback status text when a failed submission has no message.
pub(crate) const SUBMIT_ERROR: &str = "Failed to create";

pub struct AdminFormReducer;

impl Reducer for AdminFormReducer {
    type State = AdminFormState;
    type Intent = AdminIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Controls are disabled while a submission is outstanding.
            AdminIntent::Edit(_) if state.submitting => state,
            AdminIntent::Edit(edit) => apply_edit(state, edit),

            // Double-submit guard: a second submit while in flight is a
            // no-op.
            AdminIntent::SubmitStarted if state.submitting => state,
            AdminIntent::SubmitStarted => AdminFormState {
                submitting: true,
                status: None,
                ..state
            },

            AdminIntent::SubmitSucceeded { id } if state.submitting => AdminFormState {
                // Every draft field returns to its default; the token is
                // the one thing the user keeps.
                draft: AnnouncementDraft::default(),
                token: state.token,
                submitting: false,
                status: Some(SubmitStatus::Created(id)),
            },
            AdminIntent::SubmitSucceeded { .. } => state,

            AdminIntent::SubmitFailed { message } if state.submitting => AdminFormState {
                submitting: false,
                status: Some(SubmitStatus::Failed(
                    message.unwrap_or_else(|| SUBMIT_ERROR.to_string()),
                )),
                ..state
            },
            AdminIntent::SubmitFailed { .. } => state,
        }
    }
}

fn apply_edit(mut state: AdminFormState, edit: FieldEdit) -> AdminFormState {
    match edit {
        FieldEdit::Title(v) => state.draft.title = v,
        FieldEdit::Message(v) => state.draft.message = v,
        FieldEdit::StartDate(v) => state.draft.start_date = v,
        FieldEdit::EndDate(v) => state.draft.end_date = v,
        FieldEdit::NotifyAt(v) => state.draft.notify_at = v,
        FieldEdit::Priority(v) => state.draft.priority = v,
        FieldEdit::Active(v) => state.draft.active = v,
        FieldEdit::CreatedBy(v) => state.draft.created_by = v,
        FieldEdit::Token(v) => state.token = v,
    }
    state
}
