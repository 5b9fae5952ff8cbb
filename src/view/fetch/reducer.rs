use std::marker::PhantomData;

use crate::view::fetch::intent::FetchIntent;
use crate::view::fetch::state::FetchState;
use crate::view::mvi::Reducer;

/// A read-only page: the payload it fetches and the fixed message shown
/// when its fetch fails without a usable error message.
pub trait ReadView: Send + 'static {
    type Data: Clone + PartialEq + Send + 'static;

    /// Fallback error text for this page.
    const LOAD_ERROR: &'static str;
}

/// Shared reducer for every read-only page.
pub struct FetchReducer<P: ReadView> {
    _page: PhantomData<P>,
}

impl<P: ReadView> Reducer for FetchReducer<P> {
    type State = FetchState<P::Data>;
    type Intent = FetchIntent<P::Data>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Only an unmounted page starts loading. A second Mount on a
            // live page is a no-op: there is no re-entry to Loading
            // without a fresh state.
            FetchIntent::Mount => match state {
                FetchState::Idle => FetchState::Loading,
                other => other,
            },
            FetchIntent::Resolved(data) => match state {
                FetchState::Loading => FetchState::Success(data),
                // A late resolution after the page settled is discarded.
                other => other,
            },
            FetchIntent::Rejected(message) => match state {
                FetchState::Loading => {
                    FetchState::Failure(message.unwrap_or_else(|| P::LOAD_ERROR.to_string()))
                }
                other => other,
            },
        }
    }
}
