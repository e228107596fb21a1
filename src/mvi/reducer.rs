//! Reducer trait for MVI architecture.

use super::effect::SideEffect;
use super::intent::Intent;
use super::state::UiState;

/// Result of a single reduce step: the next state plus zero-or-one
/// side effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    /// Next state, replacing the previous one wholesale.
    pub state: S,
    /// One-shot notification to deliver alongside the new state.
    pub effect: Option<E>,
}

impl<S, E> Transition<S, E> {
    /// Transition to `state` without emitting an effect.
    pub fn next(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// Transition to `state` and emit `effect` once.
    pub fn with_effect(state: S, effect: E) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Transition. No
/// wall-clock reads, no I/O — data an intent needs travels inside
/// the intent itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The side-effect type this reducer can emit.
    type Effect: SideEffect;

    /// Process an intent and return the new state plus an optional
    /// one-shot side effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect>;
}
