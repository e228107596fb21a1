//! HTTP implementation of the remote auth adapter.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::auth::RemoteAuthSource;
use crate::domain::{ChangePasswordRequest, Credential, TeacherProfile};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote auth adapter backed by reqwest.
///
/// Performs single-shot JSON calls against the dormitory backend.
/// Beyond the connect timeout there is no retry or timeout override —
/// failures surface immediately as [`AuthError`] values.
pub struct AuthHttpClient {
    http: Client,
    base_url: String,
}

impl AuthHttpClient {
    /// Build a client for `base_url` (scheme + host, no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("failed to build auth http client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { http, base_url }
    }
}

/// Wire format of the login request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    name: &'a str,
    password: &'a str,
}

/// Wire format of a successful login response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    name: String,
    is_male: bool,
    start_floor: u32,
    token: String,
}

impl From<LoginResponse> for TeacherProfile {
    fn from(body: LoginResponse) -> Self {
        Self {
            name: body.name,
            is_male: body.is_male,
            start_floor: body.start_floor,
            token: body.token,
        }
    }
}

/// Wire format of the change-password request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Map a non-success status to the matching error.
///
/// 401/403 mean the backend rejected the caller's credentials; every
/// other non-2xx status is a server-side failure.
fn error_for_status(status: StatusCode) -> Option<AuthError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Some(AuthError::Unauthorized);
    }
    if !status.is_success() {
        return Some(AuthError::Server {
            status: status.as_u16(),
        });
    }
    None
}

impl RemoteAuthSource for AuthHttpClient {
    async fn login(&self, credential: Credential) -> Result<TeacherProfile, AuthError> {
        let url = format!("{}/teachers/login", self.base_url);
        tracing::debug!(name = %credential.name, "sending login request");

        let response = self
            .http
            .post(&url)
            .json(&LoginBody {
                name: &credential.name,
                password: &credential.password,
            })
            .send()
            .await
            .map_err(|source| AuthError::Network { source })?;

        if let Some(err) = error_for_status(response.status()) {
            return Err(err);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|source| AuthError::Network { source })?;

        Ok(body.into())
    }

    async fn change_password(
        &self,
        token: &str,
        request: ChangePasswordRequest,
    ) -> Result<(), AuthError> {
        let url = format!("{}/teachers/password", self.base_url);
        tracing::debug!("sending change-password request");

        let response = self
            .http
            .put(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&ChangePasswordBody {
                current_password: &request.current_password,
                new_password: &request.new_password,
            })
            .send()
            .await
            .map_err(|source| AuthError::Network { source })?;

        match error_for_status(response.status()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
