use crate::view::mvi::Intent;

/// A single-field update. Each edit touches exactly one field and
/// preserves the rest of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Message(String),
    StartDate(String),
    EndDate(String),
    NotifyAt(String),
    Priority(u8),
    Active(bool),
    CreatedBy(String),
    Token(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminIntent {
    Edit(FieldEdit),
    /// A submission passed the required-field gate and went on the wire.
    SubmitStarted,
    SubmitSucceeded { id: i64 },
    /// Carries the error's display message when one exists; the reducer
    /// substitutes the fixed fallback otherwise.
    SubmitFailed { message: Option<String> },
}

impl Intent for AdminIntent {}
