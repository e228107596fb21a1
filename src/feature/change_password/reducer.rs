//! Reducer for the change-password screen.

use crate::mvi::{Reducer, Transition};

use super::effect::ChangePasswordSideEffect;
use super::intent::ChangePasswordIntent;
use super::state::ChangePasswordState;

/// Reducer for change-password state transitions.
pub struct ChangePasswordReducer;

impl Reducer for ChangePasswordReducer {
    type State = ChangePasswordState;
    type Intent = ChangePasswordIntent;
    type Effect = ChangePasswordSideEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            ChangePasswordIntent::InputCurrentPassword(current_password) => {
                Transition::next(ChangePasswordState {
                    current_password,
                    ..state
                })
            }

            ChangePasswordIntent::InputNewPassword(new_password) => {
                Transition::next(ChangePasswordState {
                    new_password,
                    ..state
                })
            }

            ChangePasswordIntent::InputConfirmPassword(confirm_password) => {
                Transition::next(ChangePasswordState {
                    confirm_password,
                    ..state
                })
            }

            ChangePasswordIntent::StartLoading => Transition::next(ChangePasswordState {
                is_loading: true,
                ..state
            }),

            ChangePasswordIntent::Succeeded => Transition::with_effect(
                ChangePasswordState::initial(),
                ChangePasswordSideEffect::ChangePasswordSuccess,
            ),

            ChangePasswordIntent::Failed => Transition::with_effect(
                ChangePasswordState {
                    is_loading: false,
                    ..state
                },
                ChangePasswordSideEffect::ChangePasswordFail,
            ),

            ChangePasswordIntent::NotDoneInput => {
                Transition::with_effect(state, ChangePasswordSideEffect::NotDoneInput)
            }
        }
    }
}
