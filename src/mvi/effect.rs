//! Base trait for one-shot side effects in MVI architecture.

/// Marker trait for side-effect objects.
///
/// Side effects are transient notifications layered on top of state:
/// a message to show, a navigation to trigger. Unlike state they are
/// delivered at most once and are never replayed to late subscribers,
/// so re-rendering a screen does not re-show an old snackbar.
pub trait SideEffect: Send + 'static {}
