//! Authentication data layer: local profile store and remote auth client.
//!
//! Both adapters sit behind traits so screen view models receive them by
//! plain constructor injection and tests can substitute in-memory fakes.

mod client;
mod error;
mod store;

use std::future::Future;

pub use client::AuthHttpClient;
pub use error::AuthError;
pub use store::AuthFileStore;

use crate::domain::{ChangePasswordRequest, Credential, TeacherProfile};

/// Local credential storage.
///
/// Single-writer, multi-reader: only `save` and `clear` mutate, and a
/// save is atomic with respect to readers — a reader never observes a
/// half-written profile.
pub trait LocalAuthSource: Send + Sync {
    /// True iff no token has been persisted, or it was cleared.
    fn is_token_empty(&self) -> bool;

    /// Remove the token and cached profile. Best-effort and idempotent:
    /// clearing an already-empty store is a no-op.
    fn clear(&self);

    /// Persist `profile`, overwriting any previous one.
    fn save(&self, profile: &TeacherProfile) -> Result<(), AuthError>;

    /// Return the last-saved profile, or [`AuthError::NotFound`] if
    /// nothing was ever saved.
    fn fetch(&self) -> Result<TeacherProfile, AuthError>;
}

/// Remote authentication backend.
///
/// Single request/response per call. No retry, no pagination, no
/// streaming; the transport's own timeout is the only one applied.
pub trait RemoteAuthSource: Send + Sync {
    /// Exchange credentials for a teacher profile.
    ///
    /// Fails with [`AuthError::Unauthorized`] on bad credentials,
    /// [`AuthError::Network`] on transport failure and
    /// [`AuthError::Server`] on any other non-2xx response.
    fn login(
        &self,
        credential: Credential,
    ) -> impl Future<Output = Result<TeacherProfile, AuthError>> + Send;

    /// Replace the caller's password. `token` authenticates the request.
    fn change_password(
        &self,
        token: &str,
        request: ChangePasswordRequest,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;
}
