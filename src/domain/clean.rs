//! Room inspection entities.

/// Checklist for one student in a room.
///
/// `student_id` is the identity: it must be unique within a room's
/// student sequence, and all per-student intents address exactly one
/// record by it.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCheck {
    pub student_id: i64,
    pub bed_clean: bool,
    pub clothes_clean: bool,
    pub place_ok: bool,
}

impl StudentCheck {
    /// A fresh, unchecked record for `student_id`.
    pub fn unchecked(student_id: i64) -> Self {
        Self {
            student_id,
            bed_clean: false,
            clothes_clean: false,
            place_ok: false,
        }
    }
}

/// Inspection state of a single room.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomState {
    pub light_ok: bool,
    pub plug_ok: bool,
    pub shoes_ok: bool,
    pub students: Vec<StudentCheck>,
}
