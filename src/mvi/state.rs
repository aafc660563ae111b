//! Base trait for observable state in MVI architecture.

/// Marker trait for state objects held by a [`StateStore`](super::StateStore).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Sync` is required so a store can be read from concurrently with the
/// async handlers that mutate it.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
