//! Base trait for intents (user actions and network resolutions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (editing a form field, requesting a submit)
/// - Network resolutions (a fetch succeeded or failed)
/// - Lifecycle events (a page was mounted)
pub trait Intent: Send + 'static {}
