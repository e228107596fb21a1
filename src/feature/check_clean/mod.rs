//! Room-cleanliness inspection screen.

mod effect;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use effect::CheckCleanSideEffect;
pub use intent::CheckCleanIntent;
pub use reducer::CheckCleanReducer;
pub use state::CheckCleanState;
pub use view_model::CheckCleanViewModel;
