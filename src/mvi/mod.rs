//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base contract for implementing unidirectional
//! data flow across the inspection screens.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, SideEffect?) ──→ View
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of what the screen renders
//! - **Intent**: User actions or adapter results
//! - **Reducer**: Pure function that transforms state based on intents
//! - **SideEffect**: One-shot notification (message, navigation) emitted
//!   alongside a transition, delivered at most once
//!
//! The [`Container`] owns a screen's state and exposes two streams: a
//! latest-value state stream and a fire-once side-effect stream. Both are
//! scoped to the screen's lifetime and torn down with the container.

mod container;
mod effect;
mod intent;
mod reducer;
mod state;

pub use container::Container;
pub use effect::SideEffect;
pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
