//! Login screen: auto-login from the cached profile, credential login,
//! logout.

mod effect;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use effect::LoginSideEffect;
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::LoginState;
pub use view_model::LoginViewModel;
