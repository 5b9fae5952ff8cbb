use crate::view::mvi::ViewState;

/// Lifecycle of a read-only page's single fetch.
///
/// `Success` and `Failure` are terminal for the mount; only a fresh
/// mount (a new `Idle` state) can reach `Loading` again.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

// Manual impl: the derive would demand `T: Default` even though `Idle`
// carries no payload.
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Clone + PartialEq + Send + 'static> ViewState for FetchState<T> {}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }
}
