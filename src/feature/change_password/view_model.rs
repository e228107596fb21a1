//! View model for the change-password screen.

use crate::auth::{LocalAuthSource, RemoteAuthSource};
use crate::domain::ChangePasswordRequest;
use crate::mvi::Container;

use super::intent::ChangePasswordIntent;
use super::reducer::ChangePasswordReducer;
use super::state::ChangePasswordState;

/// Wires the change-password screen's adapters to its reducer.
pub struct ChangePasswordViewModel<L, R> {
    pub container: Container<ChangePasswordReducer>,
    local: L,
    remote: R,
}

impl<L, R> ChangePasswordViewModel<L, R>
where
    L: LocalAuthSource,
    R: RemoteAuthSource,
{
    pub fn new(local: L, remote: R) -> Self {
        Self {
            container: Container::new(ChangePasswordState::initial()),
            local,
            remote,
        }
    }

    pub fn input_current_password(&self, password: String) {
        self.container
            .dispatch(ChangePasswordIntent::InputCurrentPassword(password));
    }

    pub fn input_new_password(&self, password: String) {
        self.container
            .dispatch(ChangePasswordIntent::InputNewPassword(password));
    }

    pub fn input_confirm_password(&self, password: String) {
        self.container
            .dispatch(ChangePasswordIntent::InputConfirmPassword(password));
    }

    /// Submit the entered passwords.
    ///
    /// With any field empty this short-circuits to a `NotDoneInput`
    /// notification and issues no remote call. Whether `new` matches
    /// `confirm` is not checked before submitting.
    pub async fn change_password(&self) {
        let current = self.container.state();
        if !current.is_input_done() {
            self.container.dispatch(ChangePasswordIntent::NotDoneInput);
            return;
        }

        self.container.dispatch(ChangePasswordIntent::StartLoading);

        let token = match self.local.fetch() {
            Ok(profile) => profile.token,
            Err(err) => {
                tracing::warn!(error = %err, "no usable profile for change-password");
                self.container.dispatch(ChangePasswordIntent::Failed);
                return;
            }
        };

        let request = ChangePasswordRequest {
            current_password: current.current_password,
            new_password: current.new_password,
        };

        match self.remote.change_password(&token, request).await {
            Ok(()) => self.container.dispatch(ChangePasswordIntent::Succeeded),
            Err(err) => {
                tracing::warn!(error = %err, "change-password request failed");
                self.container.dispatch(ChangePasswordIntent::Failed);
            }
        }
    }
}
