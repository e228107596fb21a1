//! View model for the inspection screen.

use crate::domain::RoomState;
use crate::mvi::Container;

use super::intent::CheckCleanIntent;
use super::reducer::CheckCleanReducer;
use super::state::CheckCleanState;

/// Thin dispatch layer for the inspection screen.
///
/// This screen owns no adapters: room data is fetched by an outer
/// collaborator and handed in through [`CheckCleanViewModel::set_room_state`].
pub struct CheckCleanViewModel {
    pub container: Container<CheckCleanReducer>,
}

impl CheckCleanViewModel {
    /// `is_man_teacher` arrives as a navigation argument from the login
    /// screen.
    pub fn new(is_man_teacher: bool) -> Self {
        Self {
            container: Container::new(CheckCleanState {
                is_man_teacher,
                ..CheckCleanState::initial()
            }),
        }
    }

    /// Hand in a freshly fetched room checklist.
    pub fn set_room_state(&self, room_state: RoomState) {
        self.container
            .dispatch(CheckCleanIntent::SetRoomState(room_state));
    }

    pub fn move_to_next_room(&self) {
        self.container.dispatch(CheckCleanIntent::MoveToNextRoom);
    }

    pub fn move_to_before_room(&self) {
        self.container.dispatch(CheckCleanIntent::MoveToBeforeRoom);
    }

    pub fn move_to_room(&self, room_number: u32) {
        self.container
            .dispatch(CheckCleanIntent::MoveToRoom(room_number));
    }

    pub fn show_select_room_dialog(&self) {
        self.container
            .dispatch(CheckCleanIntent::ShowSelectRoomDialog);
    }

    pub fn dismiss_select_room_dialog(&self) {
        self.container
            .dispatch(CheckCleanIntent::DismissSelectRoomDialog);
    }

    pub fn set_personal_check_day(&self, is_personal_check_day: bool) {
        self.container.dispatch(if is_personal_check_day {
            CheckCleanIntent::SetDayIsPersonalCheckDay
        } else {
            CheckCleanIntent::SetDayIsNotPersonalCheckDay
        });
    }

    pub fn set_teacher_is_man(&self, is_man: bool) {
        self.container.dispatch(if is_man {
            CheckCleanIntent::SetTeacherIsMan
        } else {
            CheckCleanIntent::SetTeacherIsWoman
        });
    }

    pub fn set_light_complete(&self, complete: bool) {
        self.container.dispatch(if complete {
            CheckCleanIntent::SetLightIsComplete
        } else {
            CheckCleanIntent::SetLightIsNotComplete
        });
    }

    pub fn set_plug_complete(&self, complete: bool) {
        self.container.dispatch(if complete {
            CheckCleanIntent::SetPlugIsComplete
        } else {
            CheckCleanIntent::SetPlugIsNotComplete
        });
    }

    pub fn set_shoes_complete(&self, complete: bool) {
        self.container.dispatch(if complete {
            CheckCleanIntent::SetShoesAreComplete
        } else {
            CheckCleanIntent::SetShoesAreNotComplete
        });
    }

    pub fn set_student_bed_clean(&self, student_id: i64, clean: bool) {
        self.container.dispatch(if clean {
            CheckCleanIntent::SetStudentBedIsClean(student_id)
        } else {
            CheckCleanIntent::SetStudentBedIsNotClean(student_id)
        });
    }

    pub fn set_student_clothes_clean(&self, student_id: i64, clean: bool) {
        self.container.dispatch(if clean {
            CheckCleanIntent::SetStudentClothesIsClean(student_id)
        } else {
            CheckCleanIntent::SetStudentClothesIsNotClean(student_id)
        });
    }

    pub fn set_student_place_complete(&self, student_id: i64, complete: bool) {
        self.container.dispatch(if complete {
            CheckCleanIntent::SetPersonalPlaceIsComplete(student_id)
        } else {
            CheckCleanIntent::SetPersonalPlaceIsNotComplete(student_id)
        });
    }
}
