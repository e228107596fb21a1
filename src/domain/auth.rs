//! Authentication entities.

use serde::{Deserialize, Serialize};

/// Login input, constructed from what the user typed.
///
/// Transient: sent once to the remote adapter and discarded. Never
/// persisted. The password is masked in Debug output so credentials
/// cannot leak through logs.
#[derive(Clone)]
pub struct Credential {
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("password", &"••••••••")
            .finish()
    }
}

/// The supervising teacher, as returned by a successful login.
///
/// Owned by the local auth store after login and kept until an explicit
/// logout clears it. Invariant: whenever the store is non-empty, `token`
/// is non-empty too.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub name: String,
    pub is_male: bool,
    pub start_floor: u32,
    pub token: String,
}

impl std::fmt::Debug for TeacherProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeacherProfile")
            .field("name", &self.name)
            .field("is_male", &self.is_male)
            .field("start_floor", &self.start_floor)
            .field("token", &"••••••••")
            .finish()
    }
}

/// Payload for the change-password operation.
#[derive(Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("current_password", &"••••••••")
            .field("new_password", &"••••••••")
            .finish()
    }
}
