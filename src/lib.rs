//! Client core for dormitory room-cleanliness inspections.
//!
//! Supervising teachers log in, change their password and walk rooms
//! checking lights, plugs, shoes and per-student cleanliness. This
//! crate holds everything below the view layer:
//!
//! - [`mvi`] — the shared Model-View-Intent contract: per-screen state,
//!   intents, pure reducers, one-shot side effects and the container
//!   exposing the state and side-effect streams;
//! - [`domain`] — entities shared between the data layer and screens;
//! - [`auth`] — the local profile store and the remote login /
//!   change-password client, behind injectable traits;
//! - [`feature`] — the Login, ChangePassword and CheckClean screens.
//!
//! Rendering, navigation and input handling live in the consuming app;
//! it subscribes to each screen's container and dispatches intents back.

pub mod auth;
pub mod domain;
pub mod feature;
pub mod mvi;
