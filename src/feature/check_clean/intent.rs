//! Intents for the inspection screen.

use crate::domain::RoomState;
use crate::mvi::Intent;

/// Intents that can be dispatched to the inspection reducer.
///
/// All per-student intents address one record by `student_id` and are
/// absolute setters, so re-applying one converges instead of toggling
/// back.
#[derive(Debug, Clone)]
pub enum CheckCleanIntent {
    /// Replace the room checklist with freshly fetched data.
    SetRoomState(RoomState),

    MoveToNextRoom,
    MoveToBeforeRoom,
    MoveToRoom(u32),

    ShowSelectRoomDialog,
    DismissSelectRoomDialog,

    SetDayIsPersonalCheckDay,
    SetDayIsNotPersonalCheckDay,

    SetTeacherIsMan,
    SetTeacherIsWoman,

    SetLightIsComplete,
    SetLightIsNotComplete,

    SetPlugIsComplete,
    SetPlugIsNotComplete,

    SetShoesAreComplete,
    SetShoesAreNotComplete,

    SetStudentBedIsClean(i64),
    SetStudentBedIsNotClean(i64),

    SetStudentClothesIsClean(i64),
    SetStudentClothesIsNotClean(i64),

    SetPersonalPlaceIsComplete(i64),
    SetPersonalPlaceIsNotComplete(i64),
}

impl Intent for CheckCleanIntent {}
