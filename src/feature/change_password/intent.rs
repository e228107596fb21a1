//! Intents for the change-password screen.

use crate::mvi::Intent;

/// Intents that can be dispatched to the change-password reducer.
#[derive(Debug, Clone)]
pub enum ChangePasswordIntent {
    InputCurrentPassword(String),
    InputNewPassword(String),
    InputConfirmPassword(String),

    /// A change-password request is in flight.
    StartLoading,

    /// The backend accepted the new password.
    Succeeded,

    /// The backend rejected the request or it failed in transit.
    Failed,

    /// Submit was pressed with at least one field still empty.
    NotDoneInput,
}

impl Intent for ChangePasswordIntent {}
