//! `/admin` — the announcement composition form: edit a draft
//! field-by-field, submit once, report the outcome, and reset on success.

mod intent;
mod reducer;
mod state;

pub use intent::{AdminIntent, FieldEdit};
pub use reducer::AdminFormReducer;
pub use state::{AdminFormState, SubmitStatus};
