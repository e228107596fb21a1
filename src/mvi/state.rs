//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the screen's initial shape: logged out, empty inputs,
/// not loading. Every transition replaces the state wholesale; no field
/// is ever left partially defined.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
