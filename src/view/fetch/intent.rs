use crate::view::mvi::Intent;

/// Lifecycle events of a read-only page.
#[derive(Debug, Clone)]
pub enum FetchIntent<T> {
    /// The page was mounted; its one fetch is about to be issued.
    Mount,
    /// The fetch resolved with decoded data.
    Resolved(T),
    /// The fetch was rejected. Carries the error's display message when
    /// one exists; the reducer substitutes the page's fallback otherwise.
    Rejected(Option<String>),
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
