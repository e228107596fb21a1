//! One-shot notifications from the change-password screen.

use crate::mvi::SideEffect;

/// Side effects the change-password screen can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePasswordSideEffect {
    /// Password changed; the view shows a confirmation and navigates
    /// back. Delivered exactly once so re-rendering cannot re-trigger
    /// the navigation.
    ChangePasswordSuccess,

    /// The request failed; the view shows a transient message.
    ChangePasswordFail,

    /// Not every field was filled in; nothing was sent.
    NotDoneInput,
}

impl SideEffect for ChangePasswordSideEffect {}
