//! Domain entities shared across the data layer and screen features.

mod auth;
mod clean;

pub use auth::{ChangePasswordRequest, Credential, TeacherProfile};
pub use clean::{RoomState, StudentCheck};
