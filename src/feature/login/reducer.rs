//! Reducer for the login screen.

use crate::mvi::{Reducer, Transition};

use super::effect::LoginSideEffect;
use super::intent::LoginIntent;
use super::state::LoginState;

/// Reducer for login state transitions.
///
/// Pure function — storage and network calls happen in the view model
/// around the dispatch, and their results arrive as terminal intents.
pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;
    type Effect = LoginSideEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            LoginIntent::InputName(name) => Transition::next(LoginState { name, ..state }),

            LoginIntent::InputPassword(password) => {
                Transition::next(LoginState { password, ..state })
            }

            LoginIntent::StartLoading => Transition::next(LoginState {
                is_loading: true,
                ..state
            }),

            LoginIntent::FinishLoading => Transition::next(LoginState {
                is_loading: false,
                ..state
            }),

            LoginIntent::SuccessLogin(profile) => Transition::next(LoginState {
                has_login: true,
                teacher_name: profile.name,
                is_man_teacher: profile.is_male,
                start_floor: profile.start_floor,
                is_loading: false,
                // Entered credentials are spent; drop them from state.
                name: String::new(),
                password: String::new(),
            }),

            LoginIntent::FailedLogin => Transition::with_effect(
                LoginState {
                    is_loading: false,
                    ..state
                },
                LoginSideEffect::FailedLogin,
            ),

            LoginIntent::FailedAutoLogin => {
                Transition::with_effect(state, LoginSideEffect::FailedAutoLogin)
            }

            LoginIntent::Logout => Transition::next(LoginState::initial()),
        }
    }
}
