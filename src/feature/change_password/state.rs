//! State for the change-password screen.

use crate::mvi::UiState;

/// The three password fields plus the in-flight flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangePasswordState {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub is_loading: bool,
}

impl UiState for ChangePasswordState {}

impl ChangePasswordState {
    pub fn initial() -> Self {
        Self::default()
    }

    /// True iff every field has input. Submission is refused otherwise.
    pub fn is_input_done(&self) -> bool {
        !self.current_password.is_empty()
            && !self.new_password.is_empty()
            && !self.confirm_password.is_empty()
    }
}
