//! Async adapters between the pure reducers and the API client.
//!
//! This is the only place where network results become intents. Each
//! adapter issues at most one request; there is no retry, cancellation,
//! or timeout here.

use std::future::Future;

use chrono::{Local, TimeZone};
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, DraftError};
use crate::view::admin::{AdminFormReducer, AdminFormState, AdminIntent};
use crate::view::fetch::{FetchIntent, FetchReducer, FetchState, ReadView};
use crate::view::mvi::Reducer;

/// Mounts a read-only page: enters `Loading`, runs the page's one fetch,
/// and settles into `Success` or `Failure`.
pub async fn mount_read_view<P, F, Fut>(fetch: F) -> FetchState<P::Data>
where
    P: ReadView,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<P::Data, ApiError>>,
{
    let state = FetchReducer::<P>::reduce(FetchState::default(), FetchIntent::Mount);

    let intent = match fetch().await {
        Ok(data) => FetchIntent::Resolved(data),
        Err(err) => {
            warn!(error = %err, "read view fetch failed");
            FetchIntent::Rejected(Some(err.display_message()))
        }
    };

    FetchReducer::<P>::reduce(state, intent)
}

/// Drives one submission attempt through the form machine, resolving the
/// draft's local date strings in the system timezone.
pub async fn submit_announcement(
    client: &ApiClient,
    state: AdminFormState,
) -> Result<AdminFormState, DraftError> {
    submit_announcement_in(client, state, &Local).await
}

/// [`submit_announcement`] with an explicit timezone, so tests are not
/// hostage to the host's TZ setting.
///
/// Returns `Err` only when the draft never became a request: a required
/// field was empty or a date string would not parse. Server rejections
/// come back as `Ok` with a `Failed` status, leaving the draft editable.
pub async fn submit_announcement_in<Tz: TimeZone>(
    client: &ApiClient,
    state: AdminFormState,
    tz: &Tz,
) -> Result<AdminFormState, DraftError> {
    // The submit control is disabled while a submission is outstanding.
    if state.is_submitting() {
        return Ok(state);
    }

    // Required-field gate: nothing reaches the network while these are
    // empty.
    let mut missing = state.draft.missing_required();
    if state.token.trim().is_empty() {
        missing.push("adminToken");
    }
    if let Some(&field) = missing.first() {
        return Err(DraftError::MissingField(field));
    }

    let payload = state.draft.to_payload(tz)?;

    let state = AdminFormReducer::reduce(state, AdminIntent::SubmitStarted);

    // Exactly one terminal intent follows SubmitStarted, so the machine
    // always returns to its editable state.
    let intent = match client.create_announcement(&payload, &state.token).await {
        Ok(created) => {
            debug!(id = created.id, "announcement created");
            AdminIntent::SubmitSucceeded { id: created.id }
        }
        Err(err) => {
            warn!(error = %err, "announcement submission failed");
            AdminIntent::SubmitFailed {
                message: Some(err.display_message()),
            }
        }
    };

    Ok(AdminFormReducer::reduce(state, intent))
}
