//! One-shot notifications from the login screen.

use crate::mvi::SideEffect;

/// Side effects the login screen can emit.
///
/// Both surface as a transient message; neither is a persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginSideEffect {
    /// A credential login attempt failed.
    FailedLogin,

    /// Screen entry found no cached profile; the login form is needed.
    FailedAutoLogin,
}

impl SideEffect for LoginSideEffect {}
