//! State for the login screen.

use crate::mvi::UiState;

/// Everything the login screen renders.
///
/// While `has_login` is false the screen shows the credential form
/// (`name`/`password` mirror the text fields); once logged in it shows
/// the teacher card and the inspection entry button.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub has_login: bool,
    pub teacher_name: String,
    pub is_man_teacher: bool,
    pub is_loading: bool,
    pub start_floor: u32,
    pub name: String,
    pub password: String,
}

impl UiState for LoginState {}

impl LoginState {
    /// The logged-out initial shape.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Which floors this teacher inspects, for the header line.
    ///
    /// Teachers starting at floor 3 or below take the 2nd/3rd floors,
    /// everyone else the 4th/5th.
    pub fn floor_text(&self) -> &'static str {
        if self.start_floor <= 3 {
            "2nd / 3rd floor inspection"
        } else {
            "4th / 5th floor inspection"
        }
    }
}
