//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (text input, button presses)
/// - Adapter results (login succeeded, request failed)
///
/// Each screen has a closed intent enum, matched exhaustively by its
/// reducer. Async work never happens inside a reducer: the caller
/// dispatches a loading intent, performs the adapter call, then
/// dispatches a terminal intent carrying the result.
pub trait Intent: Send + 'static {}
