//! Base trait for page state.

/// Marker trait for page state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the page)
/// - Comparable (PartialEq for asserting transitions)
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
