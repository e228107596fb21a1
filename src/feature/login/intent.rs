//! Intents for the login screen.

use crate::domain::TeacherProfile;
use crate::mvi::Intent;

/// Intents that can be dispatched to the login reducer.
#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// User edited the name field.
    InputName(String),

    /// User edited the password field.
    InputPassword(String),

    /// A login request is in flight.
    StartLoading,

    /// A login request finished without changing login status.
    FinishLoading,

    /// Login (or auto-login) succeeded with this profile.
    SuccessLogin(TeacherProfile),

    /// The login request was rejected or failed.
    FailedLogin,

    /// No cached profile was found at screen entry.
    FailedAutoLogin,

    /// User logged out; local data is already cleared by the caller.
    Logout,
}

impl Intent for LoginIntent {}
