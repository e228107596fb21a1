//! Change-password screen.

mod effect;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use effect::ChangePasswordSideEffect;
pub use intent::ChangePasswordIntent;
pub use reducer::ChangePasswordReducer;
pub use state::ChangePasswordState;
pub use view_model::ChangePasswordViewModel;
