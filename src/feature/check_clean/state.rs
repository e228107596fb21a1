//! State for the inspection screen.

use crate::domain::RoomState;
use crate::mvi::UiState;

/// Everything the inspection screen renders: the current room and its
/// neighbors, the room-selection dialog flag, the room's checklist and
/// the inspection context.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckCleanState {
    pub room_number: u32,
    pub before_room_number: u32,
    pub next_room_number: u32,
    pub show_select_room_dialog: bool,
    pub room_state: RoomState,
    pub is_personal_check_day: bool,
    pub is_man_teacher: bool,
}

impl Default for CheckCleanState {
    fn default() -> Self {
        Self {
            room_number: 0,
            before_room_number: 0,
            next_room_number: 0,
            show_select_room_dialog: false,
            room_state: RoomState::default(),
            is_personal_check_day: false,
            is_man_teacher: true,
        }
    }
}

impl UiState for CheckCleanState {}

impl CheckCleanState {
    pub fn initial() -> Self {
        Self::default()
    }
}
