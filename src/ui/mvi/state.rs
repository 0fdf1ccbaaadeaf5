//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are replaced, never mutated in place, and hold everything a
/// renderer needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
