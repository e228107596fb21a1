//! Screen features, one module per screen.
//!
//! Each feature follows the same shape: `state`, `intent`, `effect` and
//! a pure `reducer`, plus a `view_model` that owns the screen's
//! [`Container`](crate::mvi::Container) and wires adapter calls to
//! intent dispatches.

pub mod change_password;
pub mod check_clean;
pub mod login;
