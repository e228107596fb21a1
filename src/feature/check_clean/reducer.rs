//! Reducer for the inspection screen.

use crate::domain::{RoomState, StudentCheck};
use crate::mvi::{Reducer, Transition};

use super::effect::CheckCleanSideEffect;
use super::intent::CheckCleanIntent;
use super::state::CheckCleanState;

/// Reducer for inspection state transitions.
///
/// Pure function — fetching a room's checklist happens outside and
/// arrives through `SetRoomState`.
pub struct CheckCleanReducer;

/// Position the state at `room`, keeping neighbor numbers consistent
/// and closing the selection dialog.
fn at_room(state: CheckCleanState, room: u32) -> CheckCleanState {
    CheckCleanState {
        room_number: room,
        before_room_number: room.saturating_sub(1),
        next_room_number: room + 1,
        show_select_room_dialog: false,
        ..state
    }
}

fn with_room(state: CheckCleanState, update: impl FnOnce(&mut RoomState)) -> CheckCleanState {
    let mut room_state = state.room_state.clone();
    update(&mut room_state);
    CheckCleanState { room_state, ..state }
}

/// Update exactly one student's record; other students are untouched.
/// An unknown `student_id` leaves the room unchanged.
fn with_student(
    state: CheckCleanState,
    student_id: i64,
    update: impl FnOnce(&mut StudentCheck),
) -> CheckCleanState {
    with_room(state, |room| {
        if let Some(student) = room
            .students
            .iter_mut()
            .find(|s| s.student_id == student_id)
        {
            update(student);
        }
    })
}

impl Reducer for CheckCleanReducer {
    type State = CheckCleanState;
    type Intent = CheckCleanIntent;
    type Effect = CheckCleanSideEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        let next = match intent {
            CheckCleanIntent::SetRoomState(room_state) => CheckCleanState {
                room_state,
                ..state
            },

            CheckCleanIntent::MoveToNextRoom => {
                let room = state.next_room_number;
                at_room(state, room)
            }
            CheckCleanIntent::MoveToBeforeRoom => {
                let room = state.before_room_number;
                at_room(state, room)
            }
            CheckCleanIntent::MoveToRoom(room) => at_room(state, room),

            CheckCleanIntent::ShowSelectRoomDialog => CheckCleanState {
                show_select_room_dialog: true,
                ..state
            },
            CheckCleanIntent::DismissSelectRoomDialog => CheckCleanState {
                show_select_room_dialog: false,
                ..state
            },

            CheckCleanIntent::SetDayIsPersonalCheckDay => CheckCleanState {
                is_personal_check_day: true,
                ..state
            },
            CheckCleanIntent::SetDayIsNotPersonalCheckDay => CheckCleanState {
                is_personal_check_day: false,
                ..state
            },

            CheckCleanIntent::SetTeacherIsMan => CheckCleanState {
                is_man_teacher: true,
                ..state
            },
            CheckCleanIntent::SetTeacherIsWoman => CheckCleanState {
                is_man_teacher: false,
                ..state
            },

            CheckCleanIntent::SetLightIsComplete => with_room(state, |room| room.light_ok = true),
            CheckCleanIntent::SetLightIsNotComplete => {
                with_room(state, |room| room.light_ok = false)
            }

            CheckCleanIntent::SetPlugIsComplete => with_room(state, |room| room.plug_ok = true),
            CheckCleanIntent::SetPlugIsNotComplete => with_room(state, |room| room.plug_ok = false),

            CheckCleanIntent::SetShoesAreComplete => with_room(state, |room| room.shoes_ok = true),
            CheckCleanIntent::SetShoesAreNotComplete => {
                with_room(state, |room| room.shoes_ok = false)
            }

            CheckCleanIntent::SetStudentBedIsClean(id) => {
                with_student(state, id, |s| s.bed_clean = true)
            }
            CheckCleanIntent::SetStudentBedIsNotClean(id) => {
                with_student(state, id, |s| s.bed_clean = false)
            }

            CheckCleanIntent::SetStudentClothesIsClean(id) => {
                with_student(state, id, |s| s.clothes_clean = true)
            }
            CheckCleanIntent::SetStudentClothesIsNotClean(id) => {
                with_student(state, id, |s| s.clothes_clean = false)
            }

            CheckCleanIntent::SetPersonalPlaceIsComplete(id) => {
                with_student(state, id, |s| s.place_ok = true)
            }
            CheckCleanIntent::SetPersonalPlaceIsNotComplete(id) => {
                with_student(state, id, |s| s.place_ok = false)
            }
        };

        Transition::next(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with_students() -> CheckCleanState {
        CheckCleanState {
            room_state: RoomState {
                light_ok: false,
                plug_ok: false,
                shoes_ok: false,
                students: vec![
                    StudentCheck::unchecked(1),
                    StudentCheck::unchecked(2),
                    StudentCheck::unchecked(3),
                ],
            },
            ..CheckCleanState::initial()
        }
    }

    fn reduce(state: CheckCleanState, intent: CheckCleanIntent) -> CheckCleanState {
        let transition = CheckCleanReducer::reduce(state, intent);
        assert!(transition.effect.is_none());
        transition.state
    }

    #[test]
    fn bed_clean_touches_only_the_addressed_student() {
        let state = reduce(room_with_students(), CheckCleanIntent::SetStudentBedIsClean(2));

        let students = &state.room_state.students;
        assert!(!students[0].bed_clean);
        assert!(students[1].bed_clean);
        assert!(!students[2].bed_clean);

        // Other fields of the addressed student are untouched too.
        assert!(!students[1].clothes_clean);
        assert!(!students[1].place_ok);
    }

    #[test]
    fn bed_clean_is_idempotent() {
        let once = reduce(room_with_students(), CheckCleanIntent::SetStudentBedIsClean(2));
        let twice = reduce(once.clone(), CheckCleanIntent::SetStudentBedIsClean(2));
        assert_eq!(once, twice);
        assert!(twice.room_state.students[1].bed_clean);
    }

    #[test]
    fn unknown_student_id_changes_nothing() {
        let state = room_with_students();
        let next = reduce(state.clone(), CheckCleanIntent::SetStudentBedIsClean(99));
        assert_eq!(next, state);
    }

    #[test]
    fn clothes_and_place_setters_round_trip() {
        let state = reduce(
            room_with_students(),
            CheckCleanIntent::SetStudentClothesIsClean(1),
        );
        assert!(state.room_state.students[0].clothes_clean);

        let state = reduce(state, CheckCleanIntent::SetStudentClothesIsNotClean(1));
        assert!(!state.room_state.students[0].clothes_clean);

        let state = reduce(state, CheckCleanIntent::SetPersonalPlaceIsComplete(3));
        assert!(state.room_state.students[2].place_ok);
    }

    #[test]
    fn room_level_setters() {
        let state = reduce(room_with_students(), CheckCleanIntent::SetLightIsComplete);
        assert!(state.room_state.light_ok);

        let state = reduce(state, CheckCleanIntent::SetPlugIsComplete);
        assert!(state.room_state.plug_ok);

        let state = reduce(state, CheckCleanIntent::SetShoesAreComplete);
        assert!(state.room_state.shoes_ok);

        let state = reduce(state, CheckCleanIntent::SetLightIsNotComplete);
        assert!(!state.room_state.light_ok);
        assert!(state.room_state.plug_ok);
    }

    #[test]
    fn move_to_room_keeps_neighbors_consistent() {
        let state = reduce(room_with_students(), CheckCleanIntent::MoveToRoom(205));
        assert_eq!(state.room_number, 205);
        assert_eq!(state.before_room_number, 204);
        assert_eq!(state.next_room_number, 206);
        assert!(!state.show_select_room_dialog);

        let state = reduce(state, CheckCleanIntent::MoveToNextRoom);
        assert_eq!(state.room_number, 206);
        assert_eq!(state.before_room_number, 205);

        let state = reduce(state, CheckCleanIntent::MoveToBeforeRoom);
        assert_eq!(state.room_number, 205);
    }

    #[test]
    fn select_room_dialog_flag() {
        let state = reduce(CheckCleanState::initial(), CheckCleanIntent::ShowSelectRoomDialog);
        assert!(state.show_select_room_dialog);

        let state = reduce(state, CheckCleanIntent::DismissSelectRoomDialog);
        assert!(!state.show_select_room_dialog);
    }

    #[test]
    fn moving_rooms_keeps_checklist_until_replaced() {
        let state = reduce(room_with_students(), CheckCleanIntent::SetLightIsComplete);
        let moved = reduce(state.clone(), CheckCleanIntent::MoveToRoom(301));
        assert_eq!(moved.room_state, state.room_state);

        let fresh = RoomState::default();
        let replaced = reduce(moved, CheckCleanIntent::SetRoomState(fresh.clone()));
        assert_eq!(replaced.room_state, fresh);
    }

    #[test]
    fn personal_check_day_and_teacher_flags() {
        let state = reduce(
            CheckCleanState::initial(),
            CheckCleanIntent::SetDayIsPersonalCheckDay,
        );
        assert!(state.is_personal_check_day);

        let state = reduce(state, CheckCleanIntent::SetTeacherIsWoman);
        assert!(!state.is_man_teacher);

        let state = reduce(state, CheckCleanIntent::SetTeacherIsMan);
        assert!(state.is_man_teacher);
    }
}
