//! View model for the login screen.

use crate::auth::{LocalAuthSource, RemoteAuthSource};
use crate::domain::Credential;
use crate::mvi::Container;

use super::intent::LoginIntent;
use super::reducer::LoginReducer;
use super::state::LoginState;

/// Wires the login screen's adapters to its reducer.
///
/// The view subscribes to `container` for state and side effects and
/// calls the methods below for user actions. The view model is scoped
/// to the screen: dropping it cancels any in-flight login future, so a
/// late adapter result never reaches a discarded reducer.
pub struct LoginViewModel<L, R> {
    pub container: Container<LoginReducer>,
    local: L,
    remote: R,
}

impl<L, R> LoginViewModel<L, R>
where
    L: LocalAuthSource,
    R: RemoteAuthSource,
{
    pub fn new(local: L, remote: R) -> Self {
        Self {
            container: Container::new(LoginState::initial()),
            local,
            remote,
        }
    }

    pub fn input_name(&self, name: String) {
        self.container.dispatch(LoginIntent::InputName(name));
    }

    pub fn input_password(&self, password: String) {
        self.container.dispatch(LoginIntent::InputPassword(password));
    }

    /// Auto-login check at screen entry.
    ///
    /// Populates state from the cached profile without a network call
    /// when one exists; otherwise announces that a login is needed.
    /// The cached token is trusted as-is — there is no refresh or
    /// expiry check until a later remote call rejects it.
    pub fn check_need_login(&self) {
        if self.local.is_token_empty() {
            self.container.dispatch(LoginIntent::FailedAutoLogin);
            return;
        }

        match self.local.fetch() {
            Ok(profile) => self.container.dispatch(LoginIntent::SuccessLogin(profile)),
            Err(err) => {
                tracing::warn!(error = %err, "cached profile unreadable, login required");
                self.container.dispatch(LoginIntent::FailedAutoLogin);
            }
        }
    }

    /// Submit the entered credentials.
    ///
    /// On success the profile is persisted before the state flips to
    /// logged in; on failure the screen returns to the non-loading
    /// form and storage is left untouched.
    pub async fn login(&self) {
        let current = self.container.state();
        let credential = Credential {
            name: current.name,
            password: current.password,
        };

        self.container.dispatch(LoginIntent::StartLoading);

        match self.remote.login(credential).await {
            Ok(profile) => {
                if let Err(err) = self.local.save(&profile) {
                    // Login still succeeds for this session; only the
                    // auto-login cache is lost.
                    tracing::warn!(error = %err, "failed to persist teacher profile");
                }
                self.container.dispatch(LoginIntent::SuccessLogin(profile));
            }
            Err(err) => {
                tracing::warn!(error = %err, "login request failed");
                self.container.dispatch(LoginIntent::FailedLogin);
            }
        }
    }

    /// Clear local data and reset to the logged-out shape.
    ///
    /// Synchronous and idempotent: a second logout is a no-op.
    pub fn logout(&self) {
        self.local.clear();
        self.container.dispatch(LoginIntent::Logout);
    }
}
